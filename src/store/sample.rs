use crate::model::{Compliance, Criticality, TaskRecord};

use Compliance::{Compliant, NonCompliant, Pending};
use Criticality::{High, Low, Medium};

type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Criticality,
    &'static str,
    u32,
    u32,
    Compliance,
);

// (taskId, contractId, title, category, domain, subdomain, criticality, owner, triggered, open, compliance)
const ROWS: [Row; 30] = [
    ("T001", "C001", "Review Security Protocols", "Security", "IT", "Cybersecurity", High, "John Doe", 5, 3, Pending),
    ("T007", "C001", "Data Backup Verification", "Security", "IT", "Data Management", High, "John Doe", 2, 1, Compliant),
    ("T002", "C001", "Update Firewall Rules", "Security", "IT", "Network", High, "Jane Smith", 4, 2, Compliant),
    ("T003", "C002", "Annual Financial Audit", "Finance", "Accounting", "Audit", Medium, "Mike Johnson", 6, 5, NonCompliant),
    ("T010", "C002", "Budget Planning 2024", "Finance", "Planning", "Budgeting", High, "Mike Johnson", 9, 7, Pending),
    ("T004", "C002", "Quarterly Tax Filing", "Finance", "Accounting", "Tax", High, "Sarah Wilson", 3, 1, Compliant),
    ("T005", "C003", "Employee Training Program", "HR", "Training", "Development", Medium, "Lisa Anderson", 4, 4, Pending),
    ("T006", "C003", "Performance Reviews", "HR", "Personnel", "Evaluation", Low, "Lisa Anderson", 10, 8, NonCompliant),
    ("T008", "C004", "Supply Chain Audit", "Operations", "Logistics", "Audit", Medium, "Robert Brown", 7, 6, Pending),
    ("T009", "C004", "Inventory Management Review", "Operations", "Logistics", "Inventory", Medium, "Robert Brown", 3, 3, Compliant),
    ("T011", "C001", "Penetration Test Remediation", "Security", "IT", "Cybersecurity", High, "Jane Smith", 8, 6, NonCompliant),
    ("T012", "C005", "GDPR Data Mapping", "Legal", "Privacy", "Data Protection", High, "Emily Davis", 6, 4, Pending),
    ("T013", "C005", "Vendor Contract Renewal", "Legal", "Contracts", "Procurement", Medium, "Emily Davis", 2, 0, Compliant),
    ("T014", "C003", "Onboarding Checklist Update", "HR", "Personnel", "Onboarding", Low, "Tom Harris", 1, 1, Pending),
    ("T015", "C006", "Emissions Reporting", "Environmental", "Sustainability", "Reporting", High, "Anna Lee", 5, 2, Pending),
    ("T016", "C006", "Waste Disposal Audit", "Environmental", "Sustainability", "Audit", Medium, "Anna Lee", 4, 0, Compliant),
    ("T017", "C002", "Expense Policy Review", "Finance", "Accounting", "Audit", Low, "Sarah Wilson", 2, 2, Compliant),
    ("T018", "C004", "Warehouse Safety Inspection", "Operations", "Facilities", "Safety", High, "David Clark", 6, 5, NonCompliant),
    ("T019", "C007", "Access Control Review", "Security", "IT", "Identity", Medium, "Jane Smith", 3, 2, Pending),
    ("T020", "C007", "Incident Response Drill", "Security", "IT", "Cybersecurity", High, "John Doe", 4, 4, Pending),
    ("T021", "C005", "Privacy Notice Update", "Legal", "Privacy", "Data Protection", Low, "Emily Davis", 1, 0, Compliant),
    ("T022", "C008", "Payroll Reconciliation", "Finance", "Payroll", "Reconciliation", Medium, "Mike Johnson", 5, 3, Pending),
    ("T023", "C008", "Benefits Enrollment Audit", "HR", "Benefits", "Audit", Medium, "Tom Harris", 3, 1, NonCompliant),
    ("T024", "C006", "Water Usage Monitoring", "Environmental", "Sustainability", "Monitoring", Low, "Anna Lee", 2, 1, Pending),
    ("T025", "C004", "Fleet Maintenance Log", "Operations", "Logistics", "Fleet", Low, "Robert Brown", 4, 2, Compliant),
    ("T026", "C007", "Encryption Key Rotation", "Security", "IT", "Data Management", High, "John Doe", 3, 0, Compliant),
    ("T027", "C003", "Diversity Training Rollout", "HR", "Training", "Development", Medium, "Lisa Anderson", 5, 5, Pending),
    ("T028", "C008", "Anti-Bribery Certification", "Legal", "Compliance", "Ethics", High, "Emily Davis", 7, 4, NonCompliant),
    ("T029", "C002", "Revenue Recognition Review", "Finance", "Accounting", "Revenue", High, "Sarah Wilson", 4, 3, Pending),
    ("T030", "C005", "Records Retention Schedule", "Legal", "Privacy", "Records", Low, "Tom Harris", 2, 1, Compliant),
];

/// The sample obligation set shown when no other data is loaded
pub(super) fn sample_records() -> Vec<TaskRecord> {
    ROWS.iter()
        .map(
            |&(task_id, contract_id, title, category, domain, subdomain, criticality, owner, triggered, open, compliance)| {
                TaskRecord {
                    task_id: task_id.into(),
                    contract_id: contract_id.into(),
                    obligation_title: title.into(),
                    category: category.into(),
                    domain: domain.into(),
                    subdomain: subdomain.into(),
                    criticality,
                    owner: owner.into(),
                    triggered_tasks: triggered,
                    open_tasks: open,
                    compliance,
                }
            },
        )
        .collect()
}
