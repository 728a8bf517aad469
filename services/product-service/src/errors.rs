//! Error catalog for the product service.

use svckit::api::catalog::ErrDef;

pub const PRODUCT_INVALID_ID: ErrDef = ErrDef {
    status: 400,
    title: "Invalid Product Id",
    code: "PRODUCT_INVALID_ID",
    type_url: "https://errors.commerce.dev/PRODUCT_INVALID_ID",
};

pub const PRODUCT_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Product Not Found",
    code: "PRODUCT_NOT_FOUND",
    type_url: "https://errors.commerce.dev/PRODUCT_NOT_FOUND",
};

pub const PRODUCT_INTERNAL_DATABASE: ErrDef = ErrDef {
    status: 500,
    title: "Internal Database Error",
    code: "PRODUCT_INTERNAL_DATABASE",
    type_url: "https://errors.commerce.dev/PRODUCT_INTERNAL_DATABASE",
};
