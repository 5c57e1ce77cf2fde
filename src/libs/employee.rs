/// One row of the `employees` table.
///
/// Dates are kept as the text that was stored: joining dates are only
/// shape-checked and termination dates are not checked at all, so neither
/// is guaranteed to be a real calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub designation: String,
    pub joining_date: String,
    pub termination_date: Option<String>,
    pub reason_for_leaving: Option<String>,
}

impl Employee {
    pub fn is_terminated(&self) -> bool {
        self.termination_date.is_some()
    }
}

/// Fields collected when adding an employee; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub department: String,
    pub designation: String,
    pub joining_date: String,
}

impl NewEmployee {
    pub fn new(name: &str, department: &str, designation: &str, joining_date: &str) -> Self {
        NewEmployee {
            name: name.to_string(),
            department: department.to_string(),
            designation: designation.to_string(),
            joining_date: joining_date.to_string(),
        }
    }
}
