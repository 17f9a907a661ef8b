//! Camera-failure alert shown as a desktop notification.

use std::collections::HashMap;
use zbus::{Connection, proxy};

#[proxy(
    interface = "org.freedesktop.Notifications",
    default_service = "org.freedesktop.Notifications",
    default_path = "/org/freedesktop/Notifications"
)]
trait Notifications {
    fn notify(
        &self,
        app_name: &str,
        replaces_id: u32,
        app_icon: &str,
        summary: &str,
        body: &str,
        actions: Vec<&str>,
        hints: HashMap<&str, zbus::zvariant::Value<'_>>,
        expire_timeout: i32,
    ) -> zbus::Result<u32>;
}

/// Raises a notification that stays on screen until the user dismisses it,
/// so a failed camera start cannot go unnoticed.
pub async fn send_alert(summary: &str, body: &str, icon: &str) -> zbus::Result<u32> {
    let connection = Connection::session().await?;
    let proxy = NotificationsProxy::new(&connection).await?;

    // Timeout 0 means the server never expires it on its own.
    proxy
        .notify("Airscriber", 0, icon, summary, body, Vec::new(), HashMap::new(), 0)
        .await
}
