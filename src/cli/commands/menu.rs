use crate::config::Config;
use crate::errors::AppResult;
use crate::models::cart::Cart;
use crate::models::menu::Menu;
use crate::ui::messages::header;
use crate::ui::render;

/// Handle the `menu` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    header("HomeFood Reserve menu");
    print!("{}", render::menu(&Menu::sample(), &Cart::new(), &cfg.currency));
    Ok(())
}
