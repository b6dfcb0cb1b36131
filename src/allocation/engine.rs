//! Pure proration of personnel and equipment costs over active projects.
//!
//! Only shares on active project titles count. An owner's total percent is the sum of
//! those shares and is deliberately not capped at 100, so over-allocated owners show
//! up in the report as amounts above their base value.

use crate::model::{
    Equipment, EquipmentId, Personnel, PersonnelId, Project, ProjectShare, ShareOwner,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One column of an owner's row: the owner's percent on one active project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPercent {
    pub project_title: String,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonnelAllocation {
    pub person_id: PersonnelId,
    pub name: String,
    pub department: String,
    pub salary: Option<i64>,
    /// One entry per active project, in project order. Missing shares are 0.
    pub shares: Vec<ProjectPercent>,
    pub total_percent: f64,
    pub total_amount: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentAllocation {
    pub equipment_id: EquipmentId,
    pub name: String,
    pub acquisition_cost: Option<i64>,
    pub acquisition_date: NaiveDate,
    pub shares: Vec<ProjectPercent>,
    pub total_percent: f64,
    pub total_amount: i64,
}

/// The allocation report. `Default` is the all-zero report served when inputs are
/// unavailable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AllocationReport {
    pub projects: Vec<String>,
    pub personnel_rows: Vec<PersonnelAllocation>,
    pub personnel_salary_total: i64,
    pub personnel_grand_total: i64,
    pub equipment_rows: Vec<EquipmentAllocation>,
    pub equipment_acquisition_total: i64,
    pub equipment_grand_total: i64,
}

/// Distinct titles of active projects, in first-occurrence order.
pub fn active_project_titles(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    projects
        .iter()
        .filter(|p| p.status.is_active())
        .filter(|p| seen.insert(p.title.as_str()))
        .map(|p| p.title.clone())
        .collect()
}

/// Builds the report from full store contents and the project list.
pub fn compute_allocations(
    personnel: &[Personnel],
    equipment: &[Equipment],
    personnel_shares: &[ProjectShare],
    equipment_shares: &[ProjectShare],
    projects: &[Project],
) -> AllocationReport {
    let active = active_project_titles(projects);
    allocate(personnel, equipment, personnel_shares, equipment_shares, active)
}

/// Builds the report when the active titles are already known.
pub fn allocate(
    personnel: &[Personnel],
    equipment: &[Equipment],
    personnel_shares: &[ProjectShare],
    equipment_shares: &[ProjectShare],
    active: Vec<String>,
) -> AllocationReport {
    let sheets = ShareSheets::build(personnel_shares.iter().chain(equipment_shares), &active);
    let mut report = AllocationReport::default();

    let mut grand = 0.0;
    for person in personnel {
        let row = sheets.prorate(ShareOwner::Personnel(person.id), person.base_value(), &active);
        report.personnel_salary_total += person.base_value();
        grand += row.amount;
        report.personnel_rows.push(PersonnelAllocation {
            person_id: person.id,
            name: person.name.clone(),
            department: person.department.clone(),
            salary: person.annual_salary,
            total_percent: row.total_percent,
            total_amount: row.amount as i64,
            shares: row.shares,
        });
    }
    report.personnel_grand_total = grand as i64;

    let mut grand = 0.0;
    for item in equipment {
        let row = sheets.prorate(ShareOwner::Equipment(item.id), item.base_value(), &active);
        report.equipment_acquisition_total += item.base_value();
        grand += row.amount;
        report.equipment_rows.push(EquipmentAllocation {
            equipment_id: item.id,
            name: item.name.clone(),
            acquisition_cost: item.acquisition_cost,
            acquisition_date: item.acquisition_date,
            total_percent: row.total_percent,
            total_amount: row.amount as i64,
            shares: row.shares,
        });
    }
    report.equipment_grand_total = grand as i64;

    report.projects = active;
    report
}

/// Per-owner percent by title, restricted to active titles. Later rows for the same
/// owner and title overwrite earlier ones.
struct ShareSheets<'a> {
    sheets: HashMap<ShareOwner, HashMap<&'a str, f64>>,
}

struct Prorated {
    shares: Vec<ProjectPercent>,
    total_percent: f64,
    /// Untruncated; callers truncate per row and once more for the grand total.
    amount: f64,
}

impl<'a> ShareSheets<'a> {
    fn build(shares: impl Iterator<Item = &'a ProjectShare>, active: &[String]) -> Self {
        let active: HashSet<&str> = active.iter().map(String::as_str).collect();
        let mut sheets: HashMap<ShareOwner, HashMap<&'a str, f64>> = HashMap::new();
        for share in shares.filter(|s| active.contains(s.project_title.as_str())) {
            sheets
                .entry(share.owner)
                .or_default()
                .insert(share.project_title.as_str(), share.percent);
        }
        Self { sheets }
    }

    fn prorate(&self, owner: ShareOwner, base: i64, active: &[String]) -> Prorated {
        let sheet = self.sheets.get(&owner);
        let shares: Vec<ProjectPercent> = active
            .iter()
            .map(|title| ProjectPercent {
                project_title: title.clone(),
                percent: sheet
                    .and_then(|s| s.get(title.as_str()))
                    .copied()
                    .unwrap_or(0.0),
            })
            .collect();
        let total_percent: f64 = shares.iter().map(|s| s.percent).sum();
        Prorated {
            amount: base as f64 * (total_percent / 100.0),
            total_percent,
            shares,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProjectId, ProjectStatus, ShareId};

    fn project(id: u32, title: &str, status: ProjectStatus) -> Project {
        Project {
            id: ProjectId(id),
            title: title.into(),
            status,
            organization: None,
        }
    }

    fn person(id: u32, salary: Option<i64>) -> Personnel {
        Personnel {
            id: PersonnelId(id),
            name: format!("staff {id}"),
            department: "R&D".into(),
            annual_salary: salary,
        }
    }

    fn machine(id: u32, cost: Option<i64>) -> Equipment {
        Equipment {
            id: EquipmentId(id),
            name: format!("press {id}"),
            acquisition_cost: cost,
            acquisition_date: NaiveDate::from_ymd_opt(2022, 1, 10).unwrap(),
        }
    }

    fn share(id: u32, owner: ShareOwner, title: &str, percent: f64) -> ProjectShare {
        ProjectShare {
            id: ShareId(id),
            owner,
            project_title: title.into(),
            percent,
        }
    }

    #[test]
    fn active_titles_are_distinct_and_ordered() {
        let projects = vec![
            project(1, "B", ProjectStatus::Applied),
            project(2, "A", ProjectStatus::InProgress),
            project(3, "C", ProjectStatus::Completed),
            project(4, "B", ProjectStatus::InProgress),
            project(5, "D", ProjectStatus::Planned),
        ];
        assert_eq!(active_project_titles(&projects), vec!["B", "A"]);
    }

    #[test]
    fn salary_is_prorated_over_active_projects_only() {
        let owner = ShareOwner::Personnel(PersonnelId(1));
        let report = compute_allocations(
            &[person(1, Some(60_000_000))],
            &[],
            &[share(1, owner, "A", 40.0), share(2, owner, "B", 30.0)],
            &[],
            &[
                project(1, "A", ProjectStatus::InProgress),
                project(2, "B", ProjectStatus::Completed),
            ],
        );

        assert_eq!(report.projects, vec!["A"]);
        let row = &report.personnel_rows[0];
        assert_eq!(
            row.shares,
            vec![ProjectPercent {
                project_title: "A".into(),
                percent: 40.0
            }]
        );
        assert_eq!(row.total_percent, 40.0);
        assert_eq!(row.total_amount, 24_000_000);
        assert_eq!(report.personnel_salary_total, 60_000_000);
        assert_eq!(report.personnel_grand_total, 24_000_000);
    }

    #[test]
    fn over_allocation_is_not_capped() {
        let owner = ShareOwner::Equipment(EquipmentId(2));
        let report = allocate(
            &[],
            &[machine(2, Some(1_000))],
            &[],
            &[share(1, owner, "A", 80.0), share(2, owner, "B", 70.0)],
            vec!["A".into(), "B".into()],
        );
        let row = &report.equipment_rows[0];
        assert_eq!(row.total_percent, 150.0);
        assert_eq!(row.total_amount, 1_500);
        assert_eq!(report.equipment_grand_total, 1_500);
    }

    #[test]
    fn missing_base_and_missing_shares_allocate_nothing() {
        let owner = ShareOwner::Personnel(PersonnelId(1));
        let report = allocate(
            &[person(1, None), person(2, Some(5_000))],
            &[],
            &[share(1, owner, "A", 50.0)],
            &[],
            vec!["A".into(), "B".into()],
        );
        assert_eq!(report.personnel_rows[0].total_percent, 50.0);
        assert_eq!(report.personnel_rows[0].total_amount, 0);
        assert_eq!(report.personnel_rows[1].total_percent, 0.0);
        assert_eq!(
            report.personnel_rows[1]
                .shares
                .iter()
                .map(|s| s.percent)
                .collect::<Vec<_>>(),
            vec![0.0, 0.0]
        );
        assert_eq!(report.personnel_salary_total, 5_000);
    }

    #[test]
    fn last_row_for_a_title_wins() {
        let owner = ShareOwner::Personnel(PersonnelId(1));
        let report = allocate(
            &[person(1, Some(1_000))],
            &[],
            &[share(1, owner, "A", 10.0), share(2, owner, "A", 25.0)],
            &[],
            vec!["A".into()],
        );
        assert_eq!(report.personnel_rows[0].total_percent, 25.0);
        assert_eq!(report.personnel_rows[0].total_amount, 250);
    }

    #[test]
    fn owner_kinds_do_not_collide() {
        let report = allocate(
            &[person(1, Some(1_000))],
            &[machine(1, Some(1_000))],
            &[share(1, ShareOwner::Personnel(PersonnelId(1)), "A", 10.0)],
            &[share(2, ShareOwner::Equipment(EquipmentId(1)), "A", 20.0)],
            vec!["A".into()],
        );
        assert_eq!(report.personnel_rows[0].total_amount, 100);
        assert_eq!(report.equipment_rows[0].total_amount, 200);
    }

    #[test]
    fn grand_total_truncates_once() {
        let shares: Vec<ProjectShare> = (1..=3)
            .map(|id| share(id, ShareOwner::Personnel(PersonnelId(id)), "A", 50.0))
            .collect();
        // Each row is 0.5 before truncation: rows show 0, the grand total shows 1.
        let report = allocate(
            &[person(1, Some(1)), person(2, Some(1)), person(3, Some(1))],
            &[],
            &shares,
            &[],
            vec!["A".into()],
        );
        assert!(report.personnel_rows.iter().all(|r| r.total_amount == 0));
        assert_eq!(report.personnel_grand_total, 1);
    }

    #[test]
    fn empty_inputs_give_the_zero_report() {
        assert_eq!(
            compute_allocations(&[], &[], &[], &[], &[]),
            AllocationReport::default()
        );
    }
}
