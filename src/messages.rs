//! Shared text sent by the bot.
//!
//! Keep all user-facing strings in this module so they stay in one place and are
//! easy to update or translate.

pub const CONTACT_WHATSAPP: &str = "WhatsApp: (669) 234-2444";

const FALLBACK_REPLY_ES: &str = "🤖 ¡Hola! Soy XONA de ORION Tech. El sistema está temporalmente ocupado, pero puedes contactarnos por WhatsApp: (669) 234-2444";
const FALLBACK_REPLY_EN: &str = "🤖 Hi! I'm XONA from ORION Tech. System is temporarily busy, but you can reach us on WhatsApp: (669) 234-2444";

/// Apology returned when no completion provider produced a reply.
pub fn fallback_reply(lang: &str) -> &'static str {
    if is_spanish(lang) {
        FALLBACK_REPLY_ES
    } else {
        FALLBACK_REPLY_EN
    }
}

pub fn is_spanish(lang: &str) -> bool {
    lang.trim().to_ascii_lowercase().starts_with("es")
}

// Web chat
pub const WEB_EMPTY_MESSAGE: &str = "Please send a message.";
pub const WEB_BAD_REQUEST: &str = "Error processing request.";

pub const HEALTH_SYSTEM: &str = "ORION CLOUD v2 - Web Chat Enabled";

// Telegram commands
pub const START_OWNER: &str = "🚀 *ORION CLOUD ONLINE*\n👑 Owner Mode: ACTIVADO\n\n\
*📖 COMANDOS:*\n\n\
*Accesos:*\n/acutor - Manual ORION\n/pb - Price Book\n/apps - Orion Apps\n/otp - Orion Bots\n\n\
*Profesional:*\n/cv - CV profesional\n/tj - Tarjeta trabajo\n/skills - Skills técnicas\n/landing - Landing page\n\n\
*Sistema:*\n/status - Estado\n/stats - Estadísticas\n/ayuda - Ver comandos\n\n\
O escribe cualquier cosa para hablar con XONA.";

pub const START_PUBLIC: &str = "👋 *¡Hola! Soy XONA*, asistente de ORION Tech.\n\n\
¿En qué puedo ayudarte hoy?\n\n\
📱 WhatsApp: (669) 234-2444\n🌐 Servicios de IA y Automatización";

pub const MANUAL: &str = "📖 *MANUAL ORION SYSTEM*\n\n\
🔗 https://neon-agent-hub.web.app/jarvis_manual.html\n\n\
✅ Link Público - Guárdalo!";

pub const PRICE_BOOK: &str = "💰 *PRICE BOOK v6.0 PRO*\n\n\
🔗 https://agem2024.github.io/SEGURITI-USC/pricebook.html\n\n\
✅ 100 Servicios\n💵 Precios: Estándar/Miembro/Emergencia\n🎯 Sistema Good/Better/Best";

pub const APPS: &str = "🔗 *ORION APPS*\n\n\
1️⃣ https://ai.studio/apps/drive/1vikKncwaJRxWOANGeEcnchTAM96CqmnZ\n\
2️⃣ https://ai.studio/apps/drive/1bMGhzGDqLL_aDfnSC78Ie_HnsF7b691I\n\
3️⃣ https://ai.studio/apps/drive/1BKOJ2-29twcjdG1BooF6-Nh82VpXm6Hi\n\n\
_Modo App habilitado_";

pub const BOTS: &str = "🤖 *ORION BOTS - Landing*\n\n\
🔗 https://agem2024.github.io/SEGURITI-USC/orion-bots.html\n\n\
✨ Servicios de Automatización WhatsApp\n🚀 Bots Personalizados";

pub const CV: &str = "📄 *CV PROFESIONAL*\n\n\
🔗 https://agem2024.github.io/SEGURITI-USC/cv_pro.html\n\n\
👤 Alex G. Espinosa\n🎯 AI Architect | 21+ años experiencia";

pub const CARD: &str = "💼 *TARJETA DIGITAL*\n\n\
🔗 https://agem2024.github.io/SEGURITI-USC/card.html\n\n\
📱 Contacto profesional digital";

pub const SKILLS: &str = "🛠️ *SKILLS TÉCNICAS*\n\n\
• Python, JavaScript, Node.js\n\
• AI/ML (Gemini, OpenAI, LangChain)\n\
• WhatsApp Automation (Baileys)\n\
• Cloud (Firebase, Render, Vercel)\n\
• 21+ años ingeniería";

pub const LANDING: &str = "🌐 *LANDING PAGE*\n\n\
🔗 https://agem2024.github.io/SEGURITI-USC/orion-bots.html\n\n\
🚀 ORION Tech - AI Solutions";

pub const HELP: &str = "❓ *AYUDA ORION CLOUD*\n\n\
*📖 Accesos:*\n/acutor - Manual\n/pb - Price Book\n/apps - Orion Apps\n/otp - Orion Bots\n\n\
*💼 Profesional:*\n/cv - CV\n/tj - Tarjeta\n/skills - Skills\n/landing - Landing\n\n\
*🔧 Sistema:*\n/status - Estado\n/stats - Stats\n\n\
_O escribe cualquier pregunta para XONA_";

pub fn status_text(system_info: &str, base_url: Option<&str>) -> String {
    let url = base_url.unwrap_or("(BASE_URL not set)");
    format!(
        "🟢 *ORION CLOUD STATUS*\n\n✅ Brain: Online\n✅ Webhook: Active\n✅ API: Running\n\n🌐 {url}\n\n{system_info}"
    )
}

pub fn stats_text(providers: &[&str], catalog_version: &str) -> String {
    let ai = if providers.is_empty() {
        "none".to_string()
    } else {
        providers.join("/")
    };
    format!(
        "📊 *ESTADÍSTICAS*\n\n🤖 Sistema: XONA v2.0\n🧠 IA: {ai}\n📚 Prompts: {catalog_version}"
    )
}

pub fn voice_not_understood(lang: &str) -> &'static str {
    if is_spanish(lang) {
        "🎤 No pude entender el audio. ¿Puedes escribir tu mensaje?"
    } else {
        "🎤 I couldn't understand the audio. Could you type your message instead?"
    }
}

// Telephony
pub fn call_greeting(lang: &str) -> &'static str {
    if is_spanish(lang) {
        "Hola, gracias por llamar a ORION Tech. Soy Bruno, ¿en qué le puedo ayudar?"
    } else {
        "Hi, thanks for calling ORION Tech. This is Bruno, how can I help you today?"
    }
}

pub fn call_reprompt(lang: &str) -> &'static str {
    if is_spanish(lang) {
        "Disculpe, no le escuché bien. ¿Podría repetirlo?"
    } else {
        "Sorry, I didn't catch that. Could you say it again?"
    }
}

pub fn call_anything_else(lang: &str) -> &'static str {
    if is_spanish(lang) {
        "¿Hay algo más en lo que le pueda ayudar?"
    } else {
        "Is there anything else I can help you with?"
    }
}

pub fn call_goodbye(lang: &str) -> &'static str {
    if is_spanish(lang) {
        "Ha sido un placer atenderle. Quedamos atentos."
    } else {
        "Great chatting with you. We'll be in touch."
    }
}
