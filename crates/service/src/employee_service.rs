use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};

use models::{employee, zoo};
use crate::errors::{db_err, ServiceError};

/// Employee as listed under a zoo (the zoo reference is implied by the path).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeView {
    pub emp_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub job_description: String,
}

impl From<employee::Model> for EmployeeView {
    fn from(e: employee::Model) -> Self {
        Self {
            emp_id: e.emp_id,
            first_name: e.first_name,
            last_name: e.last_name,
            job_title: e.job_title,
            job_description: e.job_description,
        }
    }
}

/// List employees working at `zoo_id`; not-found when the zoo does not exist.
pub async fn list_employees_for_zoo<C: ConnectionTrait>(db: &C, zoo_id: i32) -> Result<Vec<EmployeeView>, ServiceError> {
    zoo::Entity::find_by_id(zoo_id)
        .one(db)
        .await
        .map_err(db_err)?
        .ok_or_else(|| ServiceError::not_found("Zoo"))?;

    let rows = employee::Entity::find()
        .filter(employee::Column::ZooId.eq(zoo_id))
        .order_by_asc(employee::Column::EmpId)
        .all(db)
        .await
        .map_err(db_err)?;
    Ok(rows.into_iter().map(EmployeeView::from).collect())
}
