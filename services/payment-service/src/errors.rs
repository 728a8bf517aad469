//! Error catalog for the payment service.

use svckit::api::catalog::ErrDef;

pub const PAYMENT_INVALID_ID: ErrDef = ErrDef {
    status: 400,
    title: "Invalid Payment Id",
    code: "PAYMENT_INVALID_ID",
    type_url: "https://errors.commerce.dev/PAYMENT_INVALID_ID",
};

pub const PAYMENT_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Payment Not Found",
    code: "PAYMENT_NOT_FOUND",
    type_url: "https://errors.commerce.dev/PAYMENT_NOT_FOUND",
};

pub const PAYMENT_INTERNAL_DATABASE: ErrDef = ErrDef {
    status: 500,
    title: "Internal Database Error",
    code: "PAYMENT_INTERNAL_DATABASE",
    type_url: "https://errors.commerce.dev/PAYMENT_INTERNAL_DATABASE",
};
