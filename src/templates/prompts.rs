pub const CHECKPOINT_PROMPT_TEMPLATE: &str = r#"# Capsy Checkpoint Prompt (User Editable)

Summarize the work log below as a mid-session checkpoint.
- What has been done so far
- What is left
- Three next actions

Work log:
{{WORKLOG_SNIPPET}}
"#;

pub const ENDDAY_PROMPT_TEMPLATE: &str = r#"# Capsy Endday Prompt (User Editable)

Summarize today's work from the work log below.
- What was finished today
- Problems and blockers
- The first three tasks for tomorrow

Work log:
{{WORKLOG_SNIPPET}}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    // The summariser swaps this placeholder for the day's worklog lines
    const WORKLOG_SNIPPET: &str = "{{WORKLOG_SNIPPET}}";

    #[test]
    fn test_prompts_carry_snippet_placeholder() {
        assert!(CHECKPOINT_PROMPT_TEMPLATE.contains(WORKLOG_SNIPPET));
        assert!(ENDDAY_PROMPT_TEMPLATE.contains(WORKLOG_SNIPPET));
    }
}
