//! Duel Arcade entry point

use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Duel Arcade".to_string(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    duel_arcade::app::run().await;
}
