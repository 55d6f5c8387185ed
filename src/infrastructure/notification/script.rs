//! Per-platform notification command builders
//!
//! Each builder produces the program and argv for one platform's
//! notification tool. Text that ends up inside a script is escaped for the
//! context it lands in; the overall command shape is fixed.

use crate::domain::config::NotifierConfig;
use crate::domain::error::NotificationError;
use crate::domain::notification::Notification;
use crate::domain::platform::Platform;

/// A fully built external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCommand {
    pub program: &'static str,
    pub args: Vec<String>,
}

/// Build the notification command for `platform`.
///
/// Fails with `UnsupportedPlatform` for anything but macOS, Linux and
/// Windows.
pub fn build_command(
    platform: &Platform,
    notification: &Notification,
    config: &NotifierConfig,
) -> Result<NotificationCommand, NotificationError> {
    match platform {
        Platform::MacOs => Ok(macos_command(notification)),
        Platform::Linux => Ok(linux_command(notification, config.timeout_ms_or_default())),
        Platform::Windows => Ok(windows_command(notification, config.app_name_or_default())),
        Platform::Unsupported(name) => Err(NotificationError::UnsupportedPlatform(name.clone())),
    }
}

/// `osascript -e 'display notification ...'`
pub fn macos_command(notification: &Notification) -> NotificationCommand {
    let mut script = format!(
        "display notification {} with title {}",
        applescript_string(&notification.message),
        applescript_string(&notification.title),
    );
    if notification.sound {
        script.push_str(r#" sound name "default""#);
    }

    NotificationCommand {
        program: "osascript",
        args: vec!["-e".to_string(), script],
    }
}

/// `notify-send -t <timeout> <title> <message>`
///
/// Arguments go straight into argv, so no quoting is involved.
pub fn linux_command(notification: &Notification, timeout_ms: u32) -> NotificationCommand {
    NotificationCommand {
        program: "notify-send",
        args: vec![
            "-t".to_string(),
            timeout_ms.to_string(),
            notification.title.clone(),
            notification.message.clone(),
        ],
    }
}

/// `powershell -Command <toast script>`
pub fn windows_command(notification: &Notification, app_name: &str) -> NotificationCommand {
    let title = powershell_here_string(&xml_text(&notification.title));
    let message = powershell_here_string(&xml_text(&notification.message));

    // The here-string terminator must start its own line.
    let script = format!(
        r#"[Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
[Windows.UI.Notifications.ToastNotification, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
[Windows.Data.Xml.Dom.XmlDocument, Windows.Data.Xml.Dom.XmlDocument, ContentType = WindowsRuntime] | Out-Null

$template = @"
<toast>
	<visual>
		<binding template="ToastGeneric">
			<text>{title}</text>
			<text>{message}</text>
		</binding>
	</visual>
</toast>
"@

$xml = New-Object Windows.Data.Xml.Dom.XmlDocument
$xml.LoadXml($template)
$toast = New-Object Windows.UI.Notifications.ToastNotification $xml
[Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier({app_id}).Show($toast)
"#,
        app_id = powershell_string(app_name),
    );

    NotificationCommand {
        program: "powershell",
        args: vec!["-Command".to_string(), script],
    }
}

/// Quote `s` as an AppleScript string literal
fn applescript_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escape XML markup characters in element text
fn xml_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // PowerShell reads these as double quotes, including in `"@`
            '\u{201C}' => out.push_str("&#x201C;"),
            '\u{201D}' => out.push_str("&#x201D;"),
            '\u{201E}' => out.push_str("&#x201E;"),
            _ => out.push(c),
        }
    }
    out
}

/// Neutralise expansion inside a PowerShell double-quoted here-string
fn powershell_here_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '`' => out.push_str("``"),
            '$' => out.push_str("`$"),
            _ => out.push(c),
        }
    }
    out
}

/// Quote `s` as a PowerShell double-quoted string
fn powershell_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '`' => out.push_str("``"),
            '$' => out.push_str("`$"),
            '"' | '\u{201C}' | '\u{201D}' | '\u{201E}' => {
                out.push('`');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macos_without_sound() {
        let cmd = macos_command(&Notification::new("Capture", "Saved to disk"));
        assert_eq!(cmd.program, "osascript");
        assert_eq!(
            cmd.args,
            vec![
                "-e".to_string(),
                r#"display notification "Saved to disk" with title "Capture""#.to_string(),
            ]
        );
    }

    #[test]
    fn macos_with_sound() {
        let cmd = macos_command(&Notification::new("Capture", "Saved").with_sound(true));
        assert_eq!(
            cmd.args[1],
            r#"display notification "Saved" with title "Capture" sound name "default""#
        );
    }

    #[test]
    fn macos_escapes_quotes_and_backslashes() {
        let cmd = macos_command(&Notification::new(r#"say "hi""#, r"C:\tmp"));
        assert_eq!(
            cmd.args[1],
            r#"display notification "C:\\tmp" with title "say \"hi\"""#
        );
    }

    #[test]
    fn linux_passes_arguments_verbatim() {
        let cmd = linux_command(&Notification::new("Ti\"tle", "$(rm -rf ~)"), 5000);
        assert_eq!(cmd.program, "notify-send");
        assert_eq!(cmd.args, vec!["-t", "5000", "Ti\"tle", "$(rm -rf ~)"]);
    }

    #[test]
    fn linux_ignores_sound_flag() {
        let plain = linux_command(&Notification::new("a", "b"), 5000);
        let loud = linux_command(&Notification::new("a", "b").with_sound(true), 5000);
        assert_eq!(plain, loud);
    }

    #[test]
    fn windows_embeds_text_in_toast_template() {
        let cmd = windows_command(&Notification::new("Capture", "Saved"), "WebShot");
        assert_eq!(cmd.program, "powershell");
        assert_eq!(cmd.args[0], "-Command");
        let script = &cmd.args[1];
        assert!(script.contains("<binding template=\"ToastGeneric\">"));
        assert!(script.contains("<text>Capture</text>"));
        assert!(script.contains("<text>Saved</text>"));
        assert!(script.contains("CreateToastNotifier(\"WebShot\").Show($toast)"));
        assert!(script.contains("\n\"@\n"));
    }

    #[test]
    fn windows_escapes_markup_and_expansion() {
        let cmd = windows_command(
            &Notification::new("<b>&</b>", "cost: $env:PATH `whoami` \"@"),
            "Web\"Shot$",
        );
        let script = &cmd.args[1];
        assert!(script.contains("<text>&lt;b&gt;&amp;&lt;/b&gt;</text>"));
        assert!(script.contains("<text>cost: `$env:PATH ``whoami`` &quot;@</text>"));
        assert!(script.contains("CreateToastNotifier(\"Web`\"Shot`$\")"));
    }

    #[test]
    fn windows_escapes_typographic_quotes() {
        let cmd = windows_command(
            &Notification::new("“quoted„", "line\n\u{201D}@\nafter"),
            "x\u{201D}+(Start-Process calc)+\u{201D}",
        );
        let script = &cmd.args[1];
        assert!(script.contains(
            "CreateToastNotifier(\"x`\u{201D}+(Start-Process calc)+`\u{201D}\")"
        ));
        assert!(script.contains("<text>&#x201C;quoted&#x201E;</text>"));
        assert!(script.contains("<text>line\n&#x201D;@\nafter</text>"));
        assert!(!script.contains("\n\u{201D}@"));
    }

    #[test]
    fn build_command_dispatches_on_platform() {
        let n = Notification::new("t", "m");
        let config = NotifierConfig::defaults();

        let mac = build_command(&Platform::MacOs, &n, &config).unwrap();
        assert_eq!(mac.program, "osascript");

        let linux = build_command(&Platform::Linux, &n, &config).unwrap();
        assert_eq!(linux.program, "notify-send");

        let windows = build_command(&Platform::Windows, &n, &config).unwrap();
        assert_eq!(windows.program, "powershell");
    }

    #[test]
    fn build_command_uses_configured_timeout() {
        let config = NotifierConfig {
            timeout_ms: Some(1200),
            ..Default::default()
        };
        let cmd = build_command(&Platform::Linux, &Notification::new("t", "m"), &config).unwrap();
        assert_eq!(cmd.args[1], "1200");
    }

    #[test]
    fn build_command_rejects_unsupported() {
        let err = build_command(
            &Platform::from_os_name("freebsd"),
            &Notification::new("t", "m"),
            &NotifierConfig::defaults(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "unsupported operating system: freebsd");
    }
}
