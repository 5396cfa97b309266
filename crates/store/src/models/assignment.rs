//! Developer-to-project assignment pairs.

use serde::{Deserialize, Serialize};

use roster_core::types::DbId;

/// One developer working on one project. The pair itself carries no
/// attributes and is unique within the registry.
///
/// Assignments reference records, not live entities: either side may be
/// deactivated after the fact without the pair being removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub project_id: DbId,
    pub developer_id: DbId,
}
