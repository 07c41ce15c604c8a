use clap::ValueEnum;

use std::{collections::HashMap, fmt::Display};

use crate::{
    error::{Error, Result},
    loader::EmployeeRecord,
    usd::{whole, Usd},
};

const NAME_WIDTH: usize = 30;
const COLUMN_WIDTH: usize = 10;
const MEMBER_MARKER: &str = "---------- ";
const RULE_WIDTH: usize = 64;

/// The reports this tool knows how to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Pay owed per employee, grouped by department.
    Payout,
}

/// Employees sharing a department, with their combined hours and pay.
#[derive(Debug, Default, PartialEq)]
pub struct Department {
    pub name: String,
    pub members: Vec<EmployeeRecord>,
    pub total_hours: f64,
    pub total_payout: Usd,
}

impl Department {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn add(&mut self, employee: EmployeeRecord) {
        self.total_hours += employee.hours_worked;
        self.total_payout += employee.payout();
        self.members.push(employee);
    }
}

/// Holds payroll data grouped by department.
///
/// Departments appear in the order they were first seen in the records, and
/// each department's members keep their original order. Totals are exact;
/// figures are only truncated to whole numbers when the report is printed via
/// its [`Display`] implementation.
#[derive(Debug, PartialEq)]
pub struct PayoutReport {
    departments: Vec<Department>,
}

impl PayoutReport {
    /// Groups `records` by department and totals each group.
    ///
    /// # Examples
    ///
    /// ```
    /// # use payroll::{EmployeeRecord, PayoutReport};
    /// let alice = EmployeeRecord {
    ///     name: "Alice".into(),
    ///     department: "IT".into(),
    ///     hours_worked: 100.0,
    ///     hourly_rate: 10.0,
    /// };
    /// let report = PayoutReport::from_records(vec![alice]).unwrap();
    /// assert_eq!(report.total_payout().dollars(), 1000.0);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoData`] if `records` is empty.
    pub fn from_records(records: Vec<EmployeeRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::NoData);
        }
        let mut departments: Vec<Department> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for employee in records {
            let i = *index
                .entry(employee.department.clone())
                .or_insert_with(|| {
                    departments.push(Department::new(&employee.department));
                    departments.len() - 1
                });
            departments[i].add(employee);
        }
        Ok(Self { departments })
    }

    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Returns the hours worked across every department.
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.departments.iter().map(|d| d.total_hours).sum()
    }

    /// Returns the pay owed across every department.
    #[must_use]
    pub fn total_payout(&self) -> Usd {
        self.departments
            .iter()
            .fold(Usd::default(), |total, d| total + d.total_payout)
    }
}

impl Display for PayoutReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:NAME_WIDTH$} {:>COLUMN_WIDTH$} {:>COLUMN_WIDTH$} {:>COLUMN_WIDTH$}",
            "name", "hours", "rate", "payout"
        )?;
        writeln!(f, "{:-<RULE_WIDTH$}", "")?;
        for dept in &self.departments {
            writeln!(f)?;
            writeln!(f, "{}", dept.name)?;
            for emp in &dept.members {
                writeln!(
                    f,
                    "{:NAME_WIDTH$} {:>COLUMN_WIDTH$} {:>COLUMN_WIDTH$} {:>COLUMN_WIDTH$}",
                    format!("{MEMBER_MARKER}{}", emp.name),
                    whole(emp.hours_worked),
                    whole(emp.hourly_rate),
                    emp.payout(),
                )?;
            }
            writeln!(
                f,
                "{:NAME_WIDTH$} {:>COLUMN_WIDTH$} {:>COLUMN_WIDTH$} {:>COLUMN_WIDTH$}",
                "",
                whole(dept.total_hours),
                "",
                dept.total_payout,
            )?;
        }
        Ok(())
    }
}
