//! Canned copy for both chat surfaces and the placeholder reply template.

/// Placeholder the reply template must contain.
pub const QUESTION_PLACEHOLDER: &str = "{question}";

pub const PAGE_ASSISTANT_NAME: &str = "MU Assistant";
pub const PAGE_STATUS_LINE: &str = "Ready to help you";
pub const PAGE_INPUT_PLACEHOLDER: &str = "Ask me anything about Murang'a University...";

pub const PAGE_WELCOME: &str = "Welcome to the Murang'a University Chatbot! \
I'm here to assist you with any questions about the university. \
How can I help you today?";

pub const PAGE_REPLY_TEMPLATE: &str = "Thank you for your question about \"{question}\". \
As your Murang'a University assistant, I can provide information about admissions, \
academic programs, campus facilities, student services, fees, and much more. \
What would you like to know specifically?";

pub const WIDGET_ASSISTANT_NAME: &str = "MU Assistant";
pub const WIDGET_STATUS_LINE: &str = "Online";
pub const WIDGET_INPUT_PLACEHOLDER: &str = "Type your message...";

pub const WIDGET_WELCOME: &str =
    "Hello! I'm your Murang'a University Chatbot Assistant. How can I help you today?";

pub const WIDGET_REPLY_TEMPLATE: &str = "I understand you're asking about \"{question}\". \
As a Murang'a University assistant, I can help you with information about admissions, \
courses, campus facilities, student services, and more. \
What specific information would you like to know?";

pub const QUICK_QUESTIONS: &[&str] = &[
    "What are the admission requirements?",
    "Tell me about available courses",
    "How much are the fees?",
    "Where is the campus located?",
    "What facilities are available?",
    "How do I apply for scholarships?",
];

/// Simulated latency before the placeholder reply lands.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;

/// Embed the user's question, verbatim, into the reply template.
pub fn render_reply(template: &str, question: &str) -> String {
    template.replace(QUESTION_PLACEHOLDER, question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_reply_embeds_question() {
        let reply = render_reply(PAGE_REPLY_TEMPLATE, "What are the fees?");
        assert!(reply.starts_with("Thank you for your question about \"What are the fees?\"."));
        assert!(!reply.contains(QUESTION_PLACEHOLDER));
    }

    #[test]
    fn test_render_reply_keeps_question_verbatim() {
        let reply = render_reply(WIDGET_REPLY_TEMPLATE, "  {question}  ");
        assert!(reply.contains("\"  {question}  \""));
    }

    #[test]
    fn test_templates_carry_placeholder() {
        assert!(PAGE_REPLY_TEMPLATE.contains(QUESTION_PLACEHOLDER));
        assert!(WIDGET_REPLY_TEMPLATE.contains(QUESTION_PLACEHOLDER));
    }
}
