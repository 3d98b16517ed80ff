use axum::response::Html;

// Embedded at compile time; the relay serves no other static assets.
const INDEX_HTML: &str = include_str!("../../../templates/index.html");

pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_the_chat_page() {
        let Html(page) = home().await;
        assert!(page.contains("<!DOCTYPE html>"));
        assert!(page.contains("chat-box"));
    }
}
