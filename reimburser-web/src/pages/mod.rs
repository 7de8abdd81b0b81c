mod collection;
mod employees;
mod login;
mod manager_portal;
mod register;
mod submit;
mod update_employee;
mod update_manager;

pub use collection::CollectionPage;
pub use employees::EmployeesPage;
pub use login::LoginPage;
pub use manager_portal::ManagerPortalPage;
pub use register::RegisterPage;
pub use submit::SubmitPage;
pub use update_employee::UpdateEmployeePage;
pub use update_manager::UpdateManagerPage;
