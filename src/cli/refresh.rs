//! Handler for the `refresh` command.

use chrono::Local;

use crate::adapter::{FileStateStore, HttpCatalogSource, TerminalRender};
use crate::app::App;
use crate::cli::RefreshArgs;
use crate::config::Config;
use crate::error::Result;

pub async fn execute(args: RefreshArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    config.init_logging();

    let source = HttpCatalogSource::new(config.catalog.url.clone(), config.catalog.timeout())?;
    let store = FileStateStore::new(config.store.data_dir());
    let app = App::new(
        source,
        store,
        config.rotation.selection_policy(),
        config.widget.style(),
        config.catalog.cache_ttl(),
    );

    let render = TerminalRender::new(args.json);
    app.refresh(args.is_forced(), Local::now(), &render).await?;
    Ok(())
}
