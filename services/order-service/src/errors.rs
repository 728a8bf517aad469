//! Error catalog for the order service.

use svckit::api::catalog::ErrDef;

pub const ORDER_INVALID_ID: ErrDef = ErrDef {
    status: 400,
    title: "Invalid Order Id",
    code: "ORDER_INVALID_ID",
    type_url: "https://errors.commerce.dev/ORDER_INVALID_ID",
};

pub const ORDER_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "Order Not Found",
    code: "ORDER_NOT_FOUND",
    type_url: "https://errors.commerce.dev/ORDER_NOT_FOUND",
};

pub const ORDER_INTERNAL_DATABASE: ErrDef = ErrDef {
    status: 500,
    title: "Internal Database Error",
    code: "ORDER_INTERNAL_DATABASE",
    type_url: "https://errors.commerce.dev/ORDER_INTERNAL_DATABASE",
};
