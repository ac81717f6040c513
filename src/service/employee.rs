use crate::model::{Entity, employee::Employee};
use crate::repository::Repository;

/// Pass-through layer between the employee handlers and storage.
///
/// Adds no behavior today; employee-specific rules would go here.
#[derive(Clone)]
pub struct EmployeeService {
    repository: Repository<Employee>,
}

impl EmployeeService {
    pub fn new(repository: Repository<Employee>) -> Self {
        Self { repository }
    }

    pub async fn save_employee(&self, employee: Employee) -> Result<Employee, sqlx::Error> {
        self.repository.save(employee).await
    }

    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, sqlx::Error> {
        self.repository.find_all().await
    }

    pub async fn get_employee_by_id(&self, empid: i32) -> Result<Option<Employee>, sqlx::Error> {
        self.repository.find_by_id(empid).await
    }

    /// Same upsert as `save_employee`; the caller decides the key.
    pub async fn update_employee(&self, employee: Employee) -> Result<Employee, sqlx::Error> {
        tracing::debug!(empid = employee.key(), "Updating employee");
        self.repository.save(employee).await
    }

    pub async fn delete_employee(&self, empid: i32) -> Result<(), sqlx::Error> {
        self.repository.delete_by_id(empid).await?;
        Ok(())
    }
}
