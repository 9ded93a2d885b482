//! Browser entry point: logger init and root mount.

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(webui::app::App);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("webui is a browser application; build it for wasm32 with trunk");
    }
}
