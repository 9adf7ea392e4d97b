mod logging;

use clap::Parser;
use console_adapter::{JsonTodoPresenter, LinesTodoPresenter};
use fixed_adapter::FixedTodoRepository;
use log::info;
use std::error::Error;
use std::io;
use todo_core::application::{TodoUsecase, TodoUsecaseImpl};
use todo_core::domain::TodoId;
use todo_core::ports::{TodoPresenter, TodoRepository};

/// Looks up a todo through the usecase layer and prints it
#[derive(Parser, Debug)]
#[command(name = "todo-cli")]
#[command(about = "Looks up a todo by id and prints its id, title and completed flag")]
struct Cli {
    /// Identifier of the todo to look up
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    id: TodoId,

    /// Print the todo as a JSON object instead of one field per line
    #[arg(long)]
    json: bool,

    /// Log level spec for stderr logging (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let _logger = match logging::init_logging(&cli.log_level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    };
    info!("event=app_start version={}", env!("CARGO_PKG_VERSION"));

    // Instantiate concrete implementations of secondary adapters
    let todo_repository: Box<dyn TodoRepository> = Box::new(FixedTodoRepository::new());

    let presenter: Box<dyn TodoPresenter> = if cli.json {
        Box::new(JsonTodoPresenter::new(io::stdout()))
    } else {
        Box::new(LinesTodoPresenter::new(io::stdout()))
    };

    // Instantiate the usecase with dependency injection
    let usecase = TodoUsecaseImpl::new(todo_repository);

    match run(&usecase, presenter.as_ref(), cli.id) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Looks up one todo and hands it to the presenter.
/// Nothing is presented when the lookup fails.
fn run(
    usecase: &dyn TodoUsecase,
    presenter: &dyn TodoPresenter,
    id: TodoId,
) -> Result<(), Box<dyn Error>> {
    let todo = usecase.one(id)?;
    presenter.present(&todo)?;
    Ok(())
}
