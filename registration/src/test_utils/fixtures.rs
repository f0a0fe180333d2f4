//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::Student;

/// Create a valid test student with id 1
pub fn test_student() -> Student {
    Student::new(1, "Name", "Address", 1234, "City").with_email(Some("Email"))
}

/// Create a valid test student with a specific id
pub fn test_student_with_id(id: i32) -> Student {
    Student::new(
        id,
        format!("name{}", id),
        format!("address{}", id),
        1000 + id.rem_euclid(9000),
        format!("city{}", id),
    )
    .with_email(Some(format!("email{}", id)))
}

/// Build a student from raw field values, absent text included
pub fn student_with(
    id: i32,
    name: Option<&str>,
    address: Option<&str>,
    zipcode: i32,
    city: Option<&str>,
    email: Option<&str>,
) -> Student {
    Student {
        id,
        name: name.map(str::to_string),
        address: address.map(str::to_string),
        zipcode,
        city: city.map(str::to_string),
        email: email.map(str::to_string),
    }
}
