pub mod ai_suggestion_service;
