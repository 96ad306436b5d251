//! Localized chat texts and the companion's system instruction.

use crate::library::helplines_for;
use crate::settings::{Language, Region};

/// Per-language greeting and quick-reply chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatLocale {
    pub greeting: &'static str,
    pub quick_replies: &'static [&'static str],
}

const EN: ChatLocale = ChatLocale {
    greeting: "Hi, I'm Anya. This is a safe, private space. How are you feeling today?",
    quick_replies: &["I'm feeling anxious", "I can't sleep", "I feel lonely", "Just want to talk"],
};

const HI: ChatLocale = ChatLocale {
    greeting: "नमस्ते, मैं अन्या हूँ। यह एक सुरक्षित और निजी जगह है। आज आप कैसा महसूस कर रहे हैं?",
    quick_replies: &["मुझे घबराहट हो रही है", "मुझे नींद नहीं आ रही", "मैं अकेला महसूस कर रहा हूँ", "बस बात करनी है"],
};

const ES: ChatLocale = ChatLocale {
    greeting: "Hola, soy Anya. Este es un espacio seguro y privado. ¿Cómo te sientes hoy?",
    quick_replies: &["Me siento ansioso", "No puedo dormir", "Me siento solo", "Solo quiero hablar"],
};

const FR: ChatLocale = ChatLocale {
    greeting: "Bonjour, je suis Anya. Cet espace est sûr et privé. Comment vous sentez-vous aujourd'hui ?",
    quick_replies: &["Je me sens anxieux", "Je n'arrive pas à dormir", "Je me sens seul", "J'ai juste besoin de parler"],
};

const DE: ChatLocale = ChatLocale {
    greeting: "Hallo, ich bin Anya. Dies ist ein sicherer, privater Ort. Wie fühlst du dich heute?",
    quick_replies: &["Ich bin ängstlich", "Ich kann nicht schlafen", "Ich fühle mich einsam", "Ich möchte einfach reden"],
};

pub fn chat_locale(language: Language) -> &'static ChatLocale {
    match language {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Es => &ES,
        Language::Fr => &FR,
        Language::De => &DE,
    }
}

/// Canned reply sent instead of a model call when crisis language is detected.
pub const SAFETY_MESSAGE: &str = "I am really concerned about what you just shared. You are not alone, and there is help available. Please reach out to someone you trust immediately.";

/// Shown when the model call fails for network or service reasons.
pub const CONNECTION_ERROR_MESSAGE: &str =
    "I'm having trouble connecting right now. Please try again in a moment.";

/// Shown when no API key is configured.
pub const SETUP_REQUIRED_MESSAGE: &str =
    "Setup required: add GEMINI_API_KEY to your environment or set chat.api_key in config.toml.";

/// Used when the model answers with no text.
pub const EMPTY_REPLY_MESSAGE: &str =
    "I'm listening, but I'm having trouble finding the right words. Could you rephrase that?";

const BASE_INSTRUCTION: &str = r#"You are "Anya", a compassionate, empathetic AI mental health companion.

CORE DIRECTIVES:
1. EMPATHY FIRST: Always validate feelings. Be warm, non-judgmental, and patient.
2. SAFETY & ETHICS (CRITICAL):
   - You are an AI, not a human. You are NOT a doctor or licensed therapist. DO NOT diagnose medical conditions or prescribe medication.
   - If a user asks for a medical diagnosis, state clearly: "I cannot provide a medical diagnosis. Please consult a qualified professional."
   - If the user expresses suicidal thoughts, self-harm, or severe distress, immediately express concern and share the helplines listed below.
3. CBT TECHNIQUES: Use Cognitive Behavioral Therapy techniques like reframing negative thoughts, grounding exercises, and guided breathing when users are anxious.

TONE:
- Calm, soothing, supportive. Like a wise older friend.

LIMITATIONS:
- Keep responses concise (under 150 words) to suit a chat interface, unless explaining a technique."#;

/// Builds the system instruction for the user's language and region.
pub fn system_instruction(language: Language, region: Region) -> String {
    let mut instruction = String::from(BASE_INSTRUCTION);

    instruction.push_str("\n\nLANGUAGE:\n");
    instruction.push_str(&format!(
        "- Reply in {}. If the user writes in another language, you may mirror it.\n",
        language.english_name()
    ));

    instruction.push_str("\nCULTURAL CONTEXT:\n");
    instruction.push_str(&format!(
        "- The user is in {}. Be mindful of local pressures and use culturally relevant metaphors when helpful.\n",
        region.label()
    ));

    instruction.push_str("\nHELPLINES:\n");
    for line in helplines_for(region) {
        instruction.push_str(&format!("- {}: {} ({})\n", line.name, line.number, line.hours));
    }

    instruction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_quick_replies() {
        for language in [Language::En, Language::Hi, Language::Es, Language::Fr, Language::De] {
            let locale = chat_locale(language);
            assert!(!locale.greeting.is_empty());
            assert_eq!(locale.quick_replies.len(), 4);
        }
    }

    #[test]
    fn test_instruction_mentions_language_and_helplines() {
        let text = system_instruction(Language::Hi, Region::In);
        assert!(text.contains("Reply in Hindi"));
        assert!(text.contains("India"));
        assert!(text.contains("9152987821"));
    }
}
