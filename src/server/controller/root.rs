/// GET / - Plain-text greeting confirming the server is up.
pub async fn root() -> &'static str {
    "Welcome to the chat app!"
}
