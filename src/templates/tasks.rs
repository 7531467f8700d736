pub const TASKS_TEMPLATE: &str = r#"# Capsy Tasks

## Backlog
- [ ] e.g. wire the worklog into an end-of-day summary

## Next
- [ ] e.g. tidy up the worklog format
"#;
