use std::process::{ExitCode, Termination};

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use error_stack::Report;
use kernel::{KernelError, RentalError};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub enum ErrorStatus {
    Kernel(Report<KernelError>),
    /// Rejected request body, one message per violated rule.
    Validation(Vec<String>),
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus::Kernel(e)
    }
}

impl From<ValidationErrors> for ErrorStatus {
    fn from(e: ValidationErrors) -> Self {
        let mut fields = e.field_errors().into_iter().collect::<Vec<_>>();
        fields.sort_by_key(|(field, _)| *field);
        let messages = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("\"{field}\" is invalid"),
                })
            })
            .collect();
        ErrorStatus::Validation(messages)
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(rejection: JsonRejection) -> Self {
        ErrorStatus::Validation(vec![rejection.body_text()])
    }
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<String>,
}

fn status_of(error: &KernelError) -> StatusCode {
    match error {
        KernelError::NotFound => StatusCode::NOT_FOUND,
        KernelError::ReferenceNotFound
        | KernelError::InvalidArgument
        | KernelError::InvalidState => StatusCode::BAD_REQUEST,
        KernelError::Conflict => StatusCode::CONFLICT,
        KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
        KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        match self {
            ErrorStatus::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(ValidationBody { errors })).into_response()
            }
            ErrorStatus::Kernel(report) => {
                let context = report.current_context();
                let status = status_of(context);
                if status.is_server_error() {
                    tracing::error!("{report:?}");
                    return status.into_response();
                }
                tracing::debug!("{report:?}");
                let message = match report.downcast_ref::<RentalError>() {
                    Some(cause) => cause.to_string(),
                    None => context.to_string(),
                };
                (status, Json(MessageBody { message })).into_response()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::{KernelError, RentalError};
    use validator::Validate;

    use super::ErrorStatus;

    #[derive(Validate)]
    struct Payload {
        #[validate(range(min = 1, message = "\"zeta\" must be at least 1"))]
        zeta: i32,
        #[validate(length(min = 1, message = "\"alpha\" must not be empty"))]
        alpha: String,
    }

    #[test]
    fn validation_messages_are_ordered_by_field() {
        let payload = Payload {
            zeta: 0,
            alpha: String::new(),
        };
        let Err(errors) = payload.validate() else {
            panic!("payload is invalid");
        };

        let ErrorStatus::Validation(messages) = ErrorStatus::from(errors) else {
            panic!("expected validation failure");
        };
        assert_eq!(
            messages,
            vec![
                "\"alpha\" must not be empty".to_string(),
                "\"zeta\" must be at least 1".to_string(),
            ]
        );
    }

    #[test]
    fn kernel_errors_map_to_status() {
        let cases = [
            (KernelError::NotFound, StatusCode::NOT_FOUND),
            (KernelError::ReferenceNotFound, StatusCode::BAD_REQUEST),
            (KernelError::InvalidArgument, StatusCode::BAD_REQUEST),
            (KernelError::InvalidState, StatusCode::BAD_REQUEST),
            (KernelError::Conflict, StatusCode::CONFLICT),
            (KernelError::Timeout, StatusCode::REQUEST_TIMEOUT),
            (KernelError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            let response = ErrorStatus::from(Report::new(error)).into_response();
            assert_eq!(response.status(), status);
        }
    }

    #[test]
    fn rental_cause_keeps_its_status() {
        let response = ErrorStatus::from(RentalError::AlreadyReturned.into_report()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ErrorStatus::from(RentalError::RentalNotFound.into_report()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
