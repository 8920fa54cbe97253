use super::layout::{APP_TITLE, Notice, NoticeKind, document, notice_box, render_notice};
use crate::utils::html::escape;

pub fn render(username: &str, notice: Option<&Notice>) -> String {
    let body = format!(
        r#"<main>
<h2>{APP_TITLE}</h2>
<p class="caption">Sign in with your corporate account</p>
<div class="columns">
<section class="wide">
<form method="post" action="/login">
<label>ID / Username <input type="text" name="username" value="{}" autocomplete="username"></label>
<label>Password <input type="password" name="password" autocomplete="current-password"></label>
<label><input type="checkbox" name="remember" checked> Remember me on this device</label>
<p><button type="submit">Sign in</button></p>
</form>
{}
</section>
<aside>
{}
<p><strong>PDPA Note</strong></p>
<p class="caption">User data and leave information must be handled according to internal security &amp; PDPA policies.</p>
</aside>
</div>
</main>"#,
        escape(username),
        render_notice(notice),
        notice_box(
            NoticeKind::Info,
            "🔐 This is a prototype login. In real use, it should connect to AD/SSO."
        ),
    );

    document("Sign in", &body)
}
