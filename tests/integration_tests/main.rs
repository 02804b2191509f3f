#[path = "../helpers/mod.rs"]
mod helpers;

mod rest_speech_test;
mod rest_translator_test;
mod scaffold_run_test;
mod settings_test;
