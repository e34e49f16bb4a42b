//! Structured results of resource operations.
//!
//! The core never touches an HTTP framework; it reports a `Status` and lets
//! the server translate it into its own status type.

/// Response status produced by the core, successful or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Created,
    NoContent,
    NotFound,
    UnprocessableEntity,
    InternalServerError,
}

impl Status {
    pub const fn as_u16(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::Created => 201,
            Status::NoContent => 204,
            Status::NotFound => 404,
            Status::UnprocessableEntity => 422,
            Status::InternalServerError => 500,
        }
    }
}

/// Successful result of a resource operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// 200 with a body.
    Ok(T),
    /// 201 with the newly created entity.
    Created(T),
    /// 204, empty body.
    NoContent,
}

impl<T> Outcome<T> {
    pub fn status(&self) -> Status {
        match self {
            Outcome::Ok(_) => Status::Ok,
            Outcome::Created(_) => Status::Created,
            Outcome::NoContent => Status::NoContent,
        }
    }

    /// Consumes the outcome and returns its body, if any.
    pub fn into_body(self) -> Option<T> {
        match self {
            Outcome::Ok(body) | Outcome::Created(body) => Some(body),
            Outcome::NoContent => None,
        }
    }
}
