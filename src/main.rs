use clap::Parser;
use first_word_analyzer::{analysis, cli, config, error, export, interactive, loader, reader, render, session, template};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use session::Session;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "first_word_analyzer=debug,first_word_common=debug"
    } else {
        "first_word_analyzer=warn,first_word_common=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            input,
            attributes,
            categories,
            ignore,
            ignore_phrases,
            stopwords,
            output,
            format,
            column,
            case,
            top,
            no_export,
        } => {
            println!("🔍 first-word - análise de primeiras palavras\n");

            let mut session = Session::from_config(&config);
            if let Some(column) = column {
                session.description_column = column;
            }
            if let Some(case) = case {
                session.case_policy = case;
            }

            // 1. 設定ファイル
            println!("[1/3] Carregando configurações...");
            session.attributes =
                loader::load_optional(attributes.as_deref(), "configuração", loader::load_attribute_config);
            session.categories =
                loader::load_optional(categories.as_deref(), "categorias", loader::load_categories);
            session.file_ignore_phrases = loader::load_optional(
                ignore.as_deref(),
                "palavras/frases para ignorar",
                loader::load_ignore_phrases,
            );
            for phrase in &ignore_phrases {
                session.add_ignore_phrase(phrase);
            }
            for word in &stopwords {
                session.add_stopword(word);
            }
            println!("✔ Configurações carregadas\n");

            // 2. 読み込み・解析
            println!("[2/3] Analisando {}...", input.display());
            let table = reader::read_table(&input)?;
            println!("✔ Arquivo carregado com sucesso! ({} registros)", table.len());

            let bar = analysis::progress_bar(table.len());
            let report = analysis::analyze_with_progress(&table, &session, &bar)?;
            render::print_summary(&report, top.unwrap_or(config.top_n));
            println!();

            // 3. 出力
            if no_export {
                println!("[3/3] Exportação ignorada (--no-export)");
            } else {
                println!("[3/3] Exportando resultados...");
                let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
                export::export_report(&report, &format, &output_dir)?;
            }

            println!("\n✅ Análise concluída");
        }

        Commands::Template { kind, output, format } => {
            let output_dir = output.unwrap_or_else(|| std::path::PathBuf::from("."));
            let written = template::write_templates(&kind, &format, &output_dir)?;
            for path in &written {
                println!("✔ Modelo gerado: {}", path.display());
            }
        }

        Commands::Interactive { input, attributes, categories, ignore } => {
            let mut session = Session::from_config(&config);
            session.attributes =
                loader::load_optional(attributes.as_deref(), "configuração", loader::load_attribute_config);
            session.categories =
                loader::load_optional(categories.as_deref(), "categorias", loader::load_categories);
            session.file_ignore_phrases = loader::load_optional(
                ignore.as_deref(),
                "palavras/frases para ignorar",
                loader::load_ignore_phrases,
            );

            let state = interactive::InteractiveState::new(session, input, config.top_n);
            interactive::run_interactive(state)?;
        }

        Commands::Stopwords { add } => {
            let mut config = config;
            let added = add.iter().filter(|word| config.add_stopword(word)).count();
            if added > 0 {
                config.save()?;
                println!("✔ {} stopwords salvas nas configurações", added);
            }

            let session = Session::from_config(&config);
            println!("Stopwords ({}):", session.stopwords.len());
            for word in session.stopwords.sorted() {
                println!("  {}", word);
            }
        }

        Commands::Config { show, set_column, set_case, set_top } => {
            let mut config = config;
            let mut changed = false;

            if let Some(column) = set_column {
                config.description_column = column;
                changed = true;
            }
            if let Some(case) = set_case {
                config.case_policy = case;
                changed = true;
            }
            if let Some(top) = set_top {
                config.top_n = top;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ Configurações salvas");
            }

            if show || !changed {
                println!("Configurações:");
                println!("  Coluna de descrição: {}", config.description_column);
                println!("  Caixa: {}", config.case_policy);
                println!("  Limite de remoções: {}", config.max_strip_passes);
                println!("  Palavras exibidas: {}", config.top_n);
                println!("  Stopwords adicionadas: {}", config.stopwords.join(", "));
            }
        }
    }

    Ok(())
}
