//! Menu choices parsed from single-character codes
//!
//! Codes are case-insensitive and surrounding whitespace is ignored. Anything
//! else parses to the `Invalid` variant, which controllers report and then
//! show the menu again.

fn single_code(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// Top-level university menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniversityOption {
    /// `A`: open the admin system
    Admin,
    /// `S`: open the student system
    Student,
    /// `X`: quit
    Exit,
    /// Unrecognised input
    Invalid,
}

impl UniversityOption {
    /// Parse a menu code
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match single_code(input) {
            Some('A') => Self::Admin,
            Some('S') => Self::Student,
            Some('X') => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Student system menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentOption {
    /// `L`: log in
    Login,
    /// `R`: register
    Register,
    /// `X`: back
    Exit,
    /// Unrecognised input
    Invalid,
}

impl StudentOption {
    /// Parse a menu code
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match single_code(input) {
            Some('L') => Self::Login,
            Some('R') => Self::Register,
            Some('X') => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Subject enrolment menu for a logged-in student
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectOption {
    /// `C`: change password
    ChangePassword,
    /// `E`: enrol in a generated subject
    Enrol,
    /// `R`: remove a subject
    Remove,
    /// `S`: show enrolled subjects
    Show,
    /// `X`: log out
    Exit,
    /// Unrecognised input
    Invalid,
}

impl SubjectOption {
    /// Parse a menu code
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match single_code(input) {
            Some('C') => Self::ChangePassword,
            Some('E') => Self::Enrol,
            Some('R') => Self::Remove,
            Some('S') => Self::Show,
            Some('X') => Self::Exit,
            _ => Self::Invalid,
        }
    }
}

/// Admin system menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminOption {
    /// `C`: clear the store
    Clear,
    /// `G`: group students by grade
    Group,
    /// `P`: partition students into pass/fail
    Partition,
    /// `R`: remove a student by id
    Remove,
    /// `S`: show all students
    Show,
    /// `X`: back
    Exit,
    /// Unrecognised input
    Invalid,
}

impl AdminOption {
    /// Parse a menu code
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match single_code(input) {
            Some('C') => Self::Clear,
            Some('G') => Self::Group,
            Some('P') => Self::Partition,
            Some('R') => Self::Remove,
            Some('S') => Self::Show,
            Some('X') => Self::Exit,
            _ => Self::Invalid,
        }
    }
}
