//! Error catalog for the user service.

use svckit::api::catalog::ErrDef;

pub const USER_INVALID_ID: ErrDef = ErrDef {
    status: 400,
    title: "Invalid User Id",
    code: "USER_INVALID_ID",
    type_url: "https://errors.commerce.dev/USER_INVALID_ID",
};

pub const USER_NOT_FOUND: ErrDef = ErrDef {
    status: 404,
    title: "User Not Found",
    code: "USER_NOT_FOUND",
    type_url: "https://errors.commerce.dev/USER_NOT_FOUND",
};

pub const USER_INTERNAL_DATABASE: ErrDef = ErrDef {
    status: 500,
    title: "Internal Database Error",
    code: "USER_INTERNAL_DATABASE",
    type_url: "https://errors.commerce.dev/USER_INTERNAL_DATABASE",
};
