//! Module/action permission checks for API handlers.

use pressgate_auth::SessionContext;
use pressgate_core::AppError;

use crate::error::ApiError;

/// Require that the session may perform `action` on `module`.
///
/// Company subjects always pass. Employees pass when the derived
/// permission map allows the pair, or when the `"Employee"` role grants
/// it directly or through a submodule.
pub fn ensure(context: &SessionContext, module: &str, action: &str) -> Result<(), ApiError> {
    if context.allows(module, action) {
        return Ok(());
    }
    Err(AppError::authorization(format!("Missing '{action}' permission on '{module}'")).into())
}
