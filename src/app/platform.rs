/// Best-effort check of the desktop's preferred color scheme.
/// Anything that can't be read counts as light mode.
pub fn detect_system_dark_mode() -> bool {
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(out) = command_output("gsettings", &["get", "org.gnome.desktop.interface", "color-scheme"]) {
            if out.contains("prefer-dark") {
                return true;
            }
        }
        if let Some(out) = command_output("gsettings", &["get", "org.gnome.desktop.interface", "gtk-theme"]) {
            if out.to_lowercase().contains("dark") {
                return true;
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(out) = command_output("defaults", &["read", "-g", "AppleInterfaceStyle"]) {
            return out.to_lowercase().contains("dark");
        }
    }

    false
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        log::debug!("{} exited with {}", program, output.status);
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}
