//! TwiML markup for the telephony channel.

use std::fmt::Write;

#[derive(Debug, Clone)]
enum Verb {
    Say {
        text: String,
        voice: String,
        language: String,
    },
    Gather {
        action: String,
        timeout: u32,
        language: String,
        prompt: Option<Box<Verb>>,
    },
    Pause {
        length: u32,
    },
    Redirect {
        url: String,
    },
    Hangup,
}

/// Builder for a `<Response>` document.
#[derive(Debug, Clone, Default)]
pub struct TwimlBuilder {
    verbs: Vec<Verb>,
}

impl TwimlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(mut self, text: &str, voice: &str, language: &str) -> Self {
        self.verbs.push(Verb::Say {
            text: text.to_string(),
            voice: voice.to_string(),
            language: language.to_string(),
        });
        self
    }

    /// Speech `<Gather>` posting the result to `action`, optionally speaking
    /// `prompt` while it listens.
    pub fn gather_speech(
        mut self,
        action: &str,
        timeout: u32,
        voice: &str,
        language: &str,
        prompt: Option<&str>,
    ) -> Self {
        let prompt = prompt.map(|text| {
            Box::new(Verb::Say {
                text: text.to_string(),
                voice: voice.to_string(),
                language: language.to_string(),
            })
        });
        self.verbs.push(Verb::Gather {
            action: action.to_string(),
            timeout,
            language: language.to_string(),
            prompt,
        });
        self
    }

    pub fn pause(mut self, seconds: u32) -> Self {
        self.verbs.push(Verb::Pause { length: seconds });
        self
    }

    pub fn redirect(mut self, url: &str) -> Self {
        self.verbs.push(Verb::Redirect {
            url: url.to_string(),
        });
        self
    }

    pub fn hangup(mut self) -> Self {
        self.verbs.push(Verb::Hangup);
        self
    }

    pub fn build(self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response>\n");
        for verb in &self.verbs {
            render(&mut xml, verb, 1);
        }
        xml.push_str("</Response>");
        xml
    }

    /// Greet the caller and listen for their first question.
    pub fn greeting_with_gather(greeting: &str, action: &str, voice: &str, language: &str) -> String {
        TwimlBuilder::new()
            .gather_speech(action, 5, voice, language, Some(greeting))
            .redirect(action)
            .build()
    }

    /// Speak `reply` while listening for a follow-up, then nudge once more.
    pub fn respond_and_gather(
        reply: &str,
        follow_up: &str,
        action: &str,
        voice: &str,
        language: &str,
    ) -> String {
        TwimlBuilder::new()
            .gather_speech(action, 5, voice, language, Some(reply))
            .gather_speech(action, 5, voice, language, Some(follow_up))
            .redirect(action)
            .build()
    }

    pub fn goodbye(message: &str, voice: &str, language: &str) -> String {
        TwimlBuilder::new()
            .say(message, voice, language)
            .pause(1)
            .hangup()
            .build()
    }
}

fn render(xml: &mut String, verb: &Verb, indent: usize) {
    let pad = "  ".repeat(indent);
    match verb {
        Verb::Say {
            text,
            voice,
            language,
        } => {
            let _ = writeln!(
                xml,
                "{pad}<Say voice=\"{}\" language=\"{}\">{}</Say>",
                xml_escape(voice),
                xml_escape(language),
                xml_escape(text)
            );
        }
        Verb::Gather {
            action,
            timeout,
            language,
            prompt,
        } => {
            let _ = write!(
                xml,
                "{pad}<Gather input=\"speech\" action=\"{}\" method=\"POST\" timeout=\"{}\" \
                 speechTimeout=\"auto\" language=\"{}\"",
                xml_escape(action),
                timeout,
                xml_escape(language)
            );
            match prompt {
                Some(inner) => {
                    let _ = writeln!(xml, ">");
                    render(xml, inner, indent + 1);
                    let _ = writeln!(xml, "{pad}</Gather>");
                }
                None => {
                    let _ = writeln!(xml, "/>");
                }
            }
        }
        Verb::Pause { length } => {
            let _ = writeln!(xml, "{pad}<Pause length=\"{length}\"/>");
        }
        Verb::Redirect { url } => {
            let _ = writeln!(
                xml,
                "{pad}<Redirect method=\"POST\">{}</Redirect>",
                xml_escape(url)
            );
        }
        Verb::Hangup => {
            let _ = writeln!(xml, "{pad}<Hangup/>");
        }
    }
}

pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
