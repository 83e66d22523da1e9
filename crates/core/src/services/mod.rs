pub mod expense_service;
pub mod id_service;
