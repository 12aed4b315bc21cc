use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derivative::Derivative;
use mongodb::bson::ser::Error as BsonError;
use mongodb::error::Error as DatabaseError;
use reqwest::Error as ReqwestError;
use serde::{Serialize, Serializer};

use crate::campaign::CampaignId;

#[derive(Debug, Serialize, Derivative)]
#[derivative(PartialEq, Eq)]
#[serde(untagged)]
pub enum Error {
    // 400
    #[serde(serialize_with = "display")]
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    #[serde(serialize_with = "display")]
    InvalidQuery(#[derivative(PartialEq = "ignore")] QueryPayloadError),

    // 404
    PathDoesNotExist,
    CampaignDoesNotExist {
        campaign_id: CampaignId,
    },

    // 405
    MethodNotAllowed,

    // 500
    #[serde(serialize_with = "display")]
    FailedDatabaseCall(#[derivative(PartialEq = "ignore")] DatabaseError),
    #[serde(serialize_with = "display")]
    FailedToSerializeToBson(#[derivative(PartialEq = "ignore")] BsonError),
    #[serde(serialize_with = "display")]
    IoError(#[derivative(PartialEq = "ignore")] IoError),
    MissingEnvironmentVariable {
        name: &'static str,
    },
    InvalidEnvironmentVariable {
        name: &'static str,
    },

    // 502
    #[serde(serialize_with = "display")]
    CompletionRequestFailed(#[derivative(PartialEq = "ignore")] ReqwestError),
    CompletionApiRejected {
        status: u16,
        code: String,
        message: String,
    },
    CompletionUnexpectedStatus {
        status: u16,
    },
    #[serde(serialize_with = "display")]
    CompletionResponseMalformed(#[derivative(PartialEq = "ignore")] ReqwestError),
    CompletionResponseMissingContent,
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "E4001000",
            Error::InvalidQuery(_) => "E4001001",
            Error::PathDoesNotExist => "E4041000",
            Error::CampaignDoesNotExist { .. } => "E4041001",
            Error::MethodNotAllowed => "E4051000",
            Error::FailedDatabaseCall(_) => "E5001000",
            Error::FailedToSerializeToBson(_) => "E5001001",
            Error::IoError(_) => "E5001002",
            Error::MissingEnvironmentVariable { .. } => "E5001003",
            Error::InvalidEnvironmentVariable { .. } => "E5001004",
            Error::CompletionRequestFailed(_) => "E5021000",
            Error::CompletionApiRejected { .. } => "E5021001",
            Error::CompletionUnexpectedStatus { .. } => "E5021002",
            Error::CompletionResponseMalformed(_) => "E5021003",
            Error::CompletionResponseMissingContent => "E5021004",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::InvalidQuery(_) => "The given query could not be parsed",
            Error::PathDoesNotExist => "The requested path was not found",
            Error::CampaignDoesNotExist { .. } => "The requested campaign was not found",
            Error::MethodNotAllowed => "The requested method is not allowed on this path",
            Error::FailedDatabaseCall(_) => {
                "An error occurred when communicating with the database"
            }
            Error::FailedToSerializeToBson(_) => {
                "An error occurred when serializing an object to bson"
            }
            Error::IoError(_) => "An error occurred during an I/O operation",
            Error::MissingEnvironmentVariable { .. } => {
                "A required environment variable is not set"
            }
            Error::InvalidEnvironmentVariable { .. } => {
                "An environment variable could not be parsed"
            }
            Error::CompletionRequestFailed(_) => {
                "The completion API could not be reached"
            }
            Error::CompletionApiRejected { .. } => "The completion API rejected the request",
            Error::CompletionUnexpectedStatus { .. } => {
                "The completion API returned an unexpected status"
            }
            Error::CompletionResponseMalformed(_) => {
                "The completion API response could not be parsed"
            }
            Error::CompletionResponseMissingContent => {
                "The completion API response contained no choices"
            }
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Error::PathDoesNotExist => StatusCode::NOT_FOUND,
            Error::CampaignDoesNotExist { .. } => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::FailedDatabaseCall(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::FailedToSerializeToBson(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::MissingEnvironmentVariable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::InvalidEnvironmentVariable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::CompletionRequestFailed(_) => StatusCode::BAD_GATEWAY,
            Error::CompletionApiRejected { .. } => StatusCode::BAD_GATEWAY,
            Error::CompletionUnexpectedStatus { .. } => StatusCode::BAD_GATEWAY,
            Error::CompletionResponseMalformed(_) => StatusCode::BAD_GATEWAY,
            Error::CompletionResponseMissingContent => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Dummy<'a> {
            error_code: &'static str,
            error_message: &'static str,
            error_meta: &'a Error,
        }

        HttpResponse::build(self.status_code()).json(&Dummy {
            error_code: self.error_code(),
            error_message: self.error_message(),
            error_meta: self,
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(self, f)
    }
}

impl From<DatabaseError> for Error {
    fn from(error: DatabaseError) -> Error {
        Error::FailedDatabaseCall(error)
    }
}

impl From<BsonError> for Error {
    fn from(error: BsonError) -> Error {
        Error::FailedToSerializeToBson(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidQuery(err) => Some(err),
            Error::FailedDatabaseCall(err) => Some(err),
            Error::FailedToSerializeToBson(err) => Some(err),
            Error::IoError(err) => Some(err),
            Error::CompletionRequestFailed(err) => Some(err),
            Error::CompletionResponseMalformed(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
