use crate::models::Student;

const PREFIX: char = 'S';
const MIN_DIGITS: usize = 3;

pub fn format_student_id(number: u64) -> String {
    format!("{}{:0width$}", PREFIX, number, width = MIN_DIGITS)
}

/// Numeric suffix of an id like `S042`, or `None` when the id is not in that form.
pub fn student_id_number(id: &str) -> Option<u64> {
    let digits = id.strip_prefix(PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Propose the id for a new student by incrementing the numeric suffix of the
/// last student in `students` that carries a well-formed id. Ids whose
/// successor does not fit a `u64` are skipped.
///
/// The proposal is only a hint for the form: nothing here guarantees it is
/// unused, the backend rejects duplicates.
pub fn next_student_id(students: &[Student]) -> String {
    let next = students
        .iter()
        .rev()
        .find_map(|s| student_id_number(&s.student_id)?.checked_add(1));
    format_student_id(next.unwrap_or(1))
}
