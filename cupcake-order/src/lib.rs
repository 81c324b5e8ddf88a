pub mod submission;

pub use submission::{
    EchoTransport, FailingTransport, Outcome, StaticTransport, SubmissionError, SubmissionService,
    SubmissionState,
};
