//! String literals in the backend sources that should be enum members.
//!
//! The table is fixed. Order matters: the `|| undefined` rewrite runs after
//! every literal rule, so it also sees text those rules produced.

use crate::core::rules::{RewriteRule, RuleSet};
use crate::utils::error::Result;

pub const RULE_SET_NAME: &str = "literal-fixes";

pub fn literal_rules() -> Result<RuleSet> {
    let rules = vec![
        // TaskStatus
        RewriteRule::template(
            "task-status-completed",
            r#"status:\s*['"]completed['"]"#,
            "status: TaskStatus.COMPLETED",
        )?,
        RewriteRule::template(
            "task-status-pending",
            r#"status:\s*['"]pending['"]"#,
            "status: TaskStatus.PENDING",
        )?,
        RewriteRule::template(
            "task-status-in-progress",
            r#"status:\s*['"]in_progress['"]"#,
            "status: TaskStatus.IN_PROGRESS",
        )?,
        RewriteRule::template(
            "task-status-assigned",
            r#"status:\s*['"]assigned['"]"#,
            "status: TaskStatus.ASSIGNED",
        )?,
        // UserRole
        RewriteRule::template(
            "role-admin",
            r#"role:\s*['"]ADMIN['"]"#,
            "role: UserRole.ADMIN",
        )?,
        RewriteRule::template(
            "role-operator",
            r#"role:\s*['"]OPERATOR['"]"#,
            "role: UserRole.OPERATOR",
        )?,
        RewriteRule::template(
            "role-manager",
            r#"role:\s*['"]MANAGER['"]"#,
            "role: UserRole.MANAGER",
        )?,
        RewriteRule::template(
            "roles-decorator-admin",
            r#"@Roles\(['"]ADMIN['"]\)"#,
            "@Roles(UserRole.ADMIN)",
        )?,
        RewriteRule::template(
            "roles-decorator-operator",
            r#"@Roles\(['"]OPERATOR['"]\)"#,
            "@Roles(UserRole.OPERATOR)",
        )?,
        RewriteRule::template(
            "roles-decorator-manager",
            r#"@Roles\(['"]MANAGER['"]\)"#,
            "@Roles(UserRole.MANAGER)",
        )?,
        RewriteRule::template(
            "roles-decorator-admin-manager",
            r#"@Roles\(['"]ADMIN['"],\s*['"]MANAGER['"]\)"#,
            "@Roles(UserRole.ADMIN, UserRole.MANAGER)",
        )?,
        // MachineStatus
        RewriteRule::template(
            "machine-status-active",
            r#"status:\s*['"]active['"]"#,
            "status: MachineStatus.ACTIVE",
        )?,
        RewriteRule::template(
            "machine-status-offline",
            r#"status:\s*['"]offline['"]"#,
            "status: MachineStatus.OFFLINE",
        )?,
        RewriteRule::template(
            "machine-status-disabled",
            r#"status:\s*['"]disabled['"]"#,
            "status: MachineStatus.DISABLED",
        )?,
        // IncidentStatus, IncidentPriority, ComplaintStatus
        RewriteRule::template(
            "incident-status-open",
            r#"status:\s*['"]open['"]"#,
            "status: IncidentStatus.OPEN",
        )?,
        RewriteRule::template(
            "incident-priority-critical",
            r#"priority:\s*['"]critical['"]"#,
            "priority: IncidentPriority.CRITICAL",
        )?,
        RewriteRule::template(
            "complaint-status-new",
            r#"status:\s*['"]new['"]"#,
            "status: ComplaintStatus.NEW",
        )?,
        // UserStatus
        RewriteRule::template(
            "user-is-active",
            r"user\.is_active",
            "user.status === UserStatus.ACTIVE",
        )?,
        // DTO dates are ISO strings
        RewriteRule::template(
            "scheduled-date-iso",
            r"scheduled_date:\s*new Date\(\)",
            "scheduled_date: new Date().toISOString()",
        )?,
        RewriteRule::template(
            "due-date-now-iso",
            r"due_date:\s*new Date\(\)",
            "due_date: new Date().toISOString()",
        )?,
        RewriteRule::template(
            "due-date-var-iso",
            r"due_date:\s*dueDate,",
            "due_date: dueDate.toISOString(),",
        )?,
        // null -> undefined
        RewriteRule::template("nullish-undefined", r"\|\|\s*undefined", "?? undefined")?,
    ];

    Ok(RuleSet::new(RULE_SET_NAME, rules))
}

/// Compiles the table and applies it once. Callers rewriting many files
/// should build the rule set once with [`literal_rules`] instead.
pub fn fix_content(text: &str) -> Result<String> {
    Ok(literal_rules()?.apply(text))
}
