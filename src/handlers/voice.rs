//! Twilio voice callbacks. Twilio does the speech recognition and posts the
//! transcript; replies are spoken back with TwiML.

use axum::{
    extract::{rejection::FormRejection, Query, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::messages;
use crate::state::AppState;
use crate::twiml::TwimlBuilder;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallRequest {
    pub call_sid: Option<String>,
    pub from: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpeechInput {
    pub call_sid: Option<String>,
    pub speech_result: Option<String>,
    pub confidence: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VoiceQuery {
    pub lang: Option<String>,
    /// Set on the callback that follows a silent re-prompt.
    #[serde(default)]
    pub retry: u8,
}

/// Twilio `language` code and Polly voice for a catalog tag.
pub fn voice_profile(lang: &str) -> (&'static str, &'static str) {
    match lang {
        "es_mx" => ("es-MX", "Polly.Andres-Neural"),
        l if messages::is_spanish(l) => ("es-US", "Polly.Miguel"),
        _ => ("en-US", "Polly.Matthew"),
    }
}

const GOODBYE_PHRASES: &[&str] = &[
    "bye",
    "goodbye",
    "good bye",
    "adiós",
    "adios",
    "chao",
    "chau",
    "hasta luego",
];

pub fn is_goodbye(speech: &str) -> bool {
    let cleaned: String = speech
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!' | '?' | '¡' | '¿'))
        .collect::<String>()
        .trim()
        .to_lowercase();
    GOODBYE_PHRASES.contains(&cleaned.as_str())
}

fn call_language(state: &AppState, requested: Option<&str>) -> String {
    let catalog = state.responder.catalog();
    match requested {
        Some(lang) if catalog.contains(lang) => lang.to_string(),
        _ if catalog.contains(&state.voice_lang) => state.voice_lang.clone(),
        _ => catalog.default_lang().to_string(),
    }
}

fn respond_action(state: &AppState, lang: &str) -> String {
    state.public_url(&format!("/voice/respond?lang={lang}"))
}

fn twiml_response(xml: String) -> Response {
    (StatusCode::OK, [(CONTENT_TYPE, "application/xml")], xml).into_response()
}

pub async fn incoming_call(
    State(state): State<AppState>,
    Query(query): Query<VoiceQuery>,
    form: Result<Form<CallRequest>, FormRejection>,
) -> Response {
    let call = form.map(|Form(call)| call).unwrap_or_default();
    let lang = call_language(&state, query.lang.as_deref());
    tracing::info!(
        call_sid = call.call_sid.as_deref().unwrap_or("unknown"),
        from = call.from.as_deref().unwrap_or("unknown"),
        lang = %lang,
        "Incoming call"
    );

    let (language, voice) = voice_profile(&lang);
    twiml_response(TwimlBuilder::greeting_with_gather(
        messages::call_greeting(&lang),
        &respond_action(&state, &lang),
        voice,
        language,
    ))
}

pub async fn speech_input(
    State(state): State<AppState>,
    Query(query): Query<VoiceQuery>,
    form: Result<Form<SpeechInput>, FormRejection>,
) -> Response {
    let input = form.map(|Form(input)| input).unwrap_or_default();
    let lang = call_language(&state, query.lang.as_deref());
    let (language, voice) = voice_profile(&lang);
    let action = respond_action(&state, &lang);
    let call_sid = input.call_sid.as_deref().unwrap_or("unknown");

    let speech = match input.speech_result.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ if query.retry > 0 => {
            tracing::info!(call_sid, "Still no speech after re-prompt; ending call");
            return twiml_response(TwimlBuilder::goodbye(
                messages::call_goodbye(&lang),
                voice,
                language,
            ));
        }
        _ => {
            tracing::debug!(call_sid, "No speech detected; prompting again");
            let retry_action = format!("{action}&retry=1");
            let xml = TwimlBuilder::new()
                .gather_speech(
                    &retry_action,
                    5,
                    voice,
                    language,
                    Some(messages::call_reprompt(&lang)),
                )
                .redirect(&retry_action)
                .build();
            return twiml_response(xml);
        }
    };

    tracing::info!(call_sid, confidence = ?input.confidence, "Speech input received");

    if is_goodbye(speech) {
        return twiml_response(TwimlBuilder::goodbye(
            messages::call_goodbye(&lang),
            voice,
            language,
        ));
    }

    let reply = state.responder.resolve(speech, &lang).await;
    twiml_response(TwimlBuilder::respond_and_gather(
        &reply,
        messages::call_anything_else(&lang),
        &action,
        voice,
        language,
    ))
}
