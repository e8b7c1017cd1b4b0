use thiserror::Error;

#[derive(Error, Debug)]
pub enum MealError {
    #[error("Invalid course: {0}")]
    InvalidCourse(String),
}
