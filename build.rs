fn main() {
    // Windows resource compilation for the console icon
    #[cfg(windows)]
    {
        println!("cargo:rerun-if-changed=assets/console.ico");
        if std::path::Path::new("assets/console.ico").exists() {
            let mut res = winres::WindowsResource::new();
            res.set_icon("assets/console.ico");
            res.compile().unwrap();
        }
    }
}
