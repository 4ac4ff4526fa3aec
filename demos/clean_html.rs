use calendarjs::{html, ordinal};

fn main() {
    let fragment = r#"<div class="event"><b>Public Hearing</b> on <a href="/zoning.pdf" onclick="track()">zoning</a>, August 8th<script>track()</script></div>"#;

    println!("{:?}", html::clean(Some(fragment)));
    println!("{:?}", html::stripped_strings(fragment));
    println!("{}", ordinal::strip_ordinals(&html::plain_text(fragment)));
}
