/// Reserved section title that introduces the summary block.
pub const OVERALL_SENTINEL: &str = "### **Overall Assessment:**";
pub const NO_SUMMARY: &str = "No summary provided.";

/// Overall assessment: the text after the first sentinel, up to a repeated
/// sentinel if the generator emitted one. `None` when the sentinel is absent.
pub fn overall_assessment(content: &str) -> Option<String> {
    if !content.contains(OVERALL_SENTINEL) {
        return None;
    }

    let summary = content
        .split(OVERALL_SENTINEL)
        .nth(1)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_SUMMARY);
    Some(summary.to_string())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_present() {
        assert_eq!(
            overall_assessment("### **Overall Assessment:** Solid choice overall.").as_deref(),
            Some("Solid choice overall.")
        );
    }

    #[test]
    fn summary_multiline() {
        let text = "### **SEO**\n**Result:** Bad\n\n### **Overall Assessment:**\nLine one.\nLine two.\n";
        assert_eq!(
            overall_assessment(text).as_deref(),
            Some("Line one.\nLine two.")
        );
    }

    #[test]
    fn sentinel_without_text() {
        assert_eq!(
            overall_assessment("### **A**\nbody\n### **Overall Assessment:**   \n").as_deref(),
            Some(NO_SUMMARY)
        );
    }

    #[test]
    fn sentinel_absent() {
        assert_eq!(overall_assessment("### **Speed**\n**Result:** Good"), None);
        // Loose mention without the exact sentinel does not count.
        assert_eq!(overall_assessment("Overall Assessment: fine"), None);
        assert_eq!(overall_assessment("### **Overall assessment:** fine"), None);
    }

    #[test]
    fn first_sentinel_wins() {
        let text = "### **Overall Assessment:** first\n### **Overall Assessment:** second";
        assert_eq!(overall_assessment(text).as_deref(), Some("first"));
    }
}
