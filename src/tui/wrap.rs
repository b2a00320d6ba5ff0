use unicode_width::UnicodeWidthChar;

/// Word-wrap `text` to `width` display columns. Words longer than the width
/// are split; blank input yields a single empty line so card faces keep a
/// stable shape.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for word in text.split_whitespace() {
        let word_width: usize = word.chars().filter_map(UnicodeWidthChar::width).sum();
        let sep = usize::from(!line.is_empty());

        if line_width + sep + word_width <= width {
            if sep == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_width += sep + word_width;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
        } else {
            // Hard-split an overlong word by display width.
            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if line_width + w > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += w;
            }
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
