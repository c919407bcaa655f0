//! Exit codes for triagectl

use triage_common::{CatalogError, TriageError};

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when a symptom key is not in the catalog
pub const EXIT_INVALID_SYMPTOM: i32 = 2;

/// Exit code when the knowledge base fails to load or validate
pub const EXIT_CATALOG_ERROR: i32 = 3;

/// Map an error chain to the process exit code
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if cause.downcast_ref::<TriageError>().is_some() {
            return EXIT_INVALID_SYMPTOM;
        }
        if cause.downcast_ref::<CatalogError>().is_some() {
            return EXIT_CATALOG_ERROR;
        }
    }
    EXIT_GENERAL_ERROR
}
