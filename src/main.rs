use std::rc::Rc;

use wordwhirl::events::Channel;
use wordwhirl::game::dictionary::{AcceptAllValidator, DictionaryApiValidator, WordValidator};
use wordwhirl::game::settings::Settings;
use wordwhirl::game::{GameEngine, WordCatalog};
use wordwhirl::model::{GameEngineCommand, GameEngineEvent};
use wordwhirl::storage::{JsonFileStore, KeyValueStore};
use wordwhirl::ui::{terminal, TerminalUi};

fn init_logging() {
    env_logger::init();
}

fn main() {
    init_logging();

    let store: Rc<dyn KeyValueStore> = Rc::new(JsonFileStore::new());
    let settings = Settings::load(store.as_ref());
    let validator: Box<dyn WordValidator> = if settings.dictionary_lookup_enabled {
        Box::new(DictionaryApiValidator::new(&settings))
    } else {
        Box::new(AcceptAllValidator)
    };
    let catalog = WordCatalog::embedded();

    let (command_emitter, command_observer) = Channel::<GameEngineCommand>::new();
    let (event_emitter, event_observer) = Channel::<GameEngineEvent>::new();

    let ui = TerminalUi::attach(&event_observer);
    let _engine = GameEngine::new(command_observer, event_emitter, catalog, validator, store);

    command_emitter.emit(&GameEngineCommand::NewGame(None));
    command_emitter.emit(&GameEngineCommand::InitDisplay);

    if let Err(err) = terminal::run(command_emitter, ui) {
        log::error!("Input loop failed: {}", err);
        std::process::exit(1);
    }
}
