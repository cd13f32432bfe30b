use crate::chat::{ ConversationContext, Responder };
use crate::cli::Args;
use crate::config::responses::{ self, ResponseConfig };
use crate::config::search_index::{ self, SearchIndexConfig };
use crate::delivery::mail::MailClient;
use crate::delivery::sheets::SheetMirror;
use crate::forms::ContactRelay;
use crate::history::{ initialize_transcript_store, TranscriptError, TranscriptStore };
use crate::models::chat::{ Conversation, Sender };
use crate::search::{ SearchIndex, SearchView };
use crate::ui::theme::{ FilePreferenceStore, Theme, ThemeController };

use log::{ info, warn };
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

/// The server-side counterpart of everything interactive on the site: the
/// chat widget, the contact forms, site search, and the theme preference.
/// One instance serves every connection; per-visitor chat state lives in
/// `contexts`, keyed by conversation id.
pub struct ConciergeAgent {
    responder: Responder,
    response_config: Arc<ResponseConfig>,
    search_index: SearchIndex,
    search_config: Arc<SearchIndexConfig>,
    relay: ContactRelay,
    transcripts: Arc<dyn TranscriptStore>,
    contexts: HashMap<String, ConversationContext>,
    theme: ThemeController,
    transcript_limit: usize,
}

impl ConciergeAgent {
    pub fn new(args: Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let response_config = responses::load_responses(&args.responses_path)?;
        let search_config = search_index::load_search_index(&args.search_index_path)?;
        let transcripts = initialize_transcript_store(&args)?;

        let mailer = MailClient::new(
            &args.mail_base_url,
            &args.mail_service_id,
            &args.mail_template_id,
            &args.mail_public_key
        )?;
        let mirror = match &args.sheet_webhook_url {
            Some(url) => Some(SheetMirror::new(url)?),
            None => {
                info!("Spreadsheet mirror disabled: no webhook URL configured");
                None
            }
        };
        let relay = ContactRelay::new(mailer, mirror);

        let preferences = Arc::new(FilePreferenceStore::new(&args.prefs_path));
        let theme = ThemeController::new(preferences);

        info!(
            "Concierge ready: {} canned replies, {} keyword rules, {} search records",
            response_config.canned.len(),
            response_config.keywords.len(),
            search_config.records.len()
        );

        Ok(Self {
            responder: Responder::new(Arc::clone(&response_config)),
            response_config,
            search_index: SearchIndex::new(Arc::clone(&search_config)),
            search_config,
            relay,
            transcripts,
            contexts: HashMap::new(),
            theme,
            transcript_limit: args.transcript_limit,
        })
    }

    pub fn greeting(&self) -> &str {
        self.responder.greeting()
    }

    pub fn quick_replies(&self) -> &[String] {
        self.responder.quick_replies()
    }

    /// Produces the reply for one chat message and records both sides of
    /// the exchange. A transcript write failure is logged but never blocks
    /// the reply.
    pub async fn process_message(&mut self, conversation_id: &str, message: &str) -> String {
        let context = self.contexts
            .entry(conversation_id.to_string())
            .or_insert_with(ConversationContext::new);
        let reply = self.responder.respond(context, message);

        if let Err(e) = self.transcripts.add_message(conversation_id, Sender::User, message).await {
            warn!("Transcript write (user) failed: {}", e);
        }
        if let Err(e) = self.transcripts.add_message(conversation_id, Sender::Bot, &reply).await {
            warn!("Transcript write (bot) failed: {}", e);
        }

        reply
    }

    pub async fn conversation(&self, conversation_id: &str) -> Result<Conversation, TranscriptError> {
        self.transcripts.get_conversation(conversation_id, self.transcript_limit).await
    }

    /// A clone of the contact relay, so form submissions can run without
    /// holding the agent lock across their network calls.
    pub fn relay_handle(&self) -> ContactRelay {
        self.relay.clone()
    }

    pub fn search(&self, query: &str) -> SearchView {
        self.search_index.query(query)
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    pub fn reload_responses_if_changed(
        &mut self,
        args: &Args
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let result = responses::reload_responses_if_changed(
            &args.responses_path,
            &self.response_config
        )?;

        if let Some(new_config) = result {
            self.response_config = Arc::clone(&new_config);
            self.responder.set_config(new_config);
            info!("Response tables successfully reloaded");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn reload_search_if_changed(
        &mut self,
        args: &Args
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let result = search_index::reload_search_index_if_changed(
            &args.search_index_path,
            &self.search_config
        )?;

        if let Some(new_config) = result {
            self.search_config = Arc::clone(&new_config);
            self.search_index.set_config(new_config);
            info!("Search index successfully reloaded");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
