use chrono::NaiveDate;

use fleet_core::entities::{
    ActivityReportDraft, ApprovedBy, ChecklistItem, DailyInspectionDraft, InspectionItem,
    MonthlyChecklistDraft, SITE_INSPECTION_CATALOG, SiteInspectionItem, SiteReportDraft, TaskItem,
};
use fleet_core::enums::{ITEM_OK, TaskStatus};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TemplateArgs;
use crate::output::output;

const TEMPLATED_FORMS: &[&str] = &[
    "monthly_checklist",
    "daily_inspection",
    "activity_report",
    "site_report",
];

/// Handle `flt template`: print a starter JSON payload for a file-based form.
///
/// The starter is a valid draft shape with today's date and item rows already
/// laid out; edit it and pass it back with `--file`. `performed_by_user` is
/// filled in from the signed-in user on submit, so it can stay empty here.
pub fn handle(args: &TemplateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let today = chrono::Utc::now().date_naive();

    match args.form.as_str() {
        "monthly_checklist" => output(&monthly_checklist(today), flags.format),
        "daily_inspection" => output(&daily_inspection(today), flags.format),
        "activity_report" => output(&activity_report(today), flags.format),
        "site_report" => output(&site_report(today), flags.format),
        other => anyhow::bail!(
            "no template for '{other}' (expected one of: {}; the flag-based forms take their \
             fields on the command line)",
            TEMPLATED_FORMS.join(", ")
        ),
    }
}

fn monthly_checklist(today: NaiveDate) -> MonthlyChecklistDraft {
    let items = [
        "engine oil level",
        "coolant level",
        "brake fluid level",
        "power steering fluid",
        "battery terminals",
        "belts and hoses",
        "tire pressure and tread",
        "lights and indicators",
        "wiper blades",
        "horn",
    ];
    MonthlyChecklistDraft {
        veh_name: String::new(),
        date: today,
        checked_by: String::new(),
        current_mileage: 0,
        date_of_last_oil_change: today,
        date_of_last_oil_filter_change: today,
        date_of_last_air_filter_change: today,
        date_of_carbin_filter_change: today,
        date_engine_tune_up: today,
        mileage_of_last_oil_change: 0,
        mileage_of_last_air_filter_change: 0,
        mileage_of_last_tire_rotation: 0,
        checklist_items: items
            .iter()
            .map(|item| ChecklistItem {
                item: (*item).to_string(),
                status: ITEM_OK,
                remark: String::new(),
            })
            .collect(),
        performed_by_user: String::new(),
    }
}

fn daily_inspection(today: NaiveDate) -> DailyInspectionDraft {
    let group = |names: &[&str]| {
        names
            .iter()
            .map(|item| InspectionItem {
                item: (*item).to_string(),
                status: ITEM_OK,
            })
            .collect::<Vec<_>>()
    };
    DailyInspectionDraft {
        date: today,
        driver_name: String::new(),
        total_mileage: 0,
        general_items: group(&["horn", "mirrors", "windshield and wipers", "body damage"]),
        driver_area_items: group(&["seat belt", "gauges and warning lights", "parking brake"]),
        front_rare_items: group(&["headlights", "tail lights", "tires", "reflectors"]),
        performed_by_user: String::new(),
    }
}

fn activity_report(today: NaiveDate) -> ActivityReportDraft {
    ActivityReportDraft {
        performed_by_user: String::new(),
        employee_name: String::new(),
        department: String::new(),
        designation: String::new(),
        supervisor: String::new(),
        date_of_reporting: today,
        week: String::new(),
        task_items: vec![TaskItem {
            description: String::new(),
            responsibility_delegate: String::new(),
            status: TaskStatus::Ongoing,
            challenges: String::new(),
            recovery_plan: String::new(),
            comment_remark: String::new(),
            approved_by: vec![ApprovedBy {
                approval_name: String::new(),
                designation: String::new(),
            }],
        }],
    }
}

fn site_report(today: NaiveDate) -> SiteReportDraft {
    SiteReportDraft {
        veh_number: String::new(),
        date: today,
        current_mileage: 0,
        checked_by: String::new(),
        date_of_last_oil_change: today,
        date_of_last_air_filter_change: today,
        date_of_last_cabin_filter_change: today,
        date_of_last_oil_filter_change: today,
        date_of_last_engine_tune_up: today,
        mileage_of_last_oil_change: 0,
        mileage_of_last_air_filter_change: 0,
        mileage_of_last_tire_rotation: 0,
        inspection_items: SITE_INSPECTION_CATALOG
            .iter()
            .map(|item| SiteInspectionItem {
                item: (*item).to_string(),
                status: ITEM_OK,
                remark: String::new(),
            })
            .collect(),
        performed_by_user: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fleet_core::entities::SITE_INSPECTION_CATALOG;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
    }

    #[test]
    fn site_report_template_carries_full_catalog() {
        let draft = super::site_report(today());
        assert_eq!(draft.inspection_items.len(), SITE_INSPECTION_CATALOG.len());
        assert!(draft.inspection_items.iter().all(|item| item.status == 1));
    }

    #[test]
    fn checklist_template_rows_are_editable_defaults() {
        let draft = super::monthly_checklist(today());
        assert!(!draft.checklist_items.is_empty());
        assert!(draft.checklist_items.iter().all(|row| row.remark.is_empty()));
    }

    #[test]
    fn inspection_template_fills_all_three_groups() {
        let draft = super::daily_inspection(today());
        assert!(!draft.general_items.is_empty());
        assert!(!draft.driver_area_items.is_empty());
        assert!(!draft.front_rare_items.is_empty());
    }

    #[test]
    fn activity_template_has_one_starter_task() {
        let draft = super::activity_report(today());
        assert_eq!(draft.task_items.len(), 1);
        assert_eq!(draft.task_items[0].approved_by.len(), 1);
    }

    #[test]
    fn templates_round_trip_through_json() {
        let json = serde_json::to_string(&super::site_report(today())).unwrap();
        let back: fleet_core::entities::SiteReportDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(back.inspection_items.len(), SITE_INSPECTION_CATALOG.len());
    }
}
