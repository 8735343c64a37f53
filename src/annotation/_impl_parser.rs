use crate::annotation::{AnnotationSink, FEATURE_LINE, KEYWORD_LINE, QUALIFIER_LINE};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Section {
    Header,
    Features,
    Origin,
}

/// **(internal)** Keeps the partially read keyword, feature and qualifier.
///
/// Keyword values, feature locations and qualifier values can span several lines, so each
/// of them is only reported once the next line shows that it is complete.
struct AnnotationParser<'a, S: AnnotationSink + ?Sized> {
    sink: &'a mut S,
    section: Section,
    keyword: Option<(String, String)>,
    keyword_open: bool,
    feature: Option<(String, String)>,
    feature_open: bool,
    qualifier: Option<(String, String)>,
}

/// Parse a GenBank-like flat file and report its contents to `sink`.
///
/// An `Err` carries a message with the number of the offending line. Events reported before
/// the error are not revoked.
pub fn parse_annotations<S>(input: &str, sink: &mut S) -> Result<(), String>
where
    S: AnnotationSink + ?Sized,
{
    let mut parser = AnnotationParser {
        sink,
        section: Section::Header,
        keyword: None,
        keyword_open: false,
        feature: None,
        feature_open: false,
        qualifier: None,
    };
    for (index, line) in input.lines().enumerate() {
        parser
            .push_line(line.trim_end_matches('\r'))
            .map_err(|error| format!("Line {}: {}", index + 1, error))?;
    }
    parser.end_record();
    Ok(())
}

impl<'a, S: AnnotationSink + ?Sized> AnnotationParser<'a, S> {
    fn push_line(&mut self, line: &str) -> Result<(), String> {
        if line == "//" {
            self.end_record();
            return Ok(());
        }
        if line.trim().is_empty() {
            return Ok(());
        }

        if !line.starts_with(char::is_whitespace) {
            let captures = KEYWORD_LINE
                .captures(line)
                .ok_or_else(|| format!("Invalid keyword line `{}`.", line))?;
            self.close_keyword();
            let name = captures[1].to_string();
            let value = captures.get(2).map(|it| it.as_str().trim()).unwrap_or("");
            self.section = match name.as_str() {
                "FEATURES" => Section::Features,
                "ORIGIN" => Section::Origin,
                _ => Section::Header,
            };
            self.keyword = Some((name, value.to_string()));
            return Ok(());
        }

        match self.section {
            Section::Origin => {
                self.flush_keyword();
                self.sink.coding_data(line.trim());
                Ok(())
            }
            Section::Header => {
                if let Some((_, value)) = self.keyword.as_mut() {
                    append_words(value, line.trim());
                    Ok(())
                } else {
                    Err("Continuation line outside of a keyword.".to_string())
                }
            }
            Section::Features => self.push_feature_line(line),
        }
    }

    fn push_feature_line(&mut self, line: &str) -> Result<(), String> {
        if let Some(captures) = FEATURE_LINE.captures(line) {
            self.close_feature();
            self.flush_keyword();
            let location = captures.get(2).map(|it| it.as_str().trim()).unwrap_or("");
            self.feature = Some((captures[1].to_string(), location.to_string()));
        } else if let Some(captures) = QUALIFIER_LINE.captures(line) {
            if self.feature.is_none() && !self.feature_open {
                return Err("Qualifier outside of a feature.".to_string());
            }
            self.flush_feature();
            self.flush_qualifier();
            let value = captures.get(2).map(|it| it.as_str().trim()).unwrap_or("");
            self.qualifier = Some((captures[1].to_string(), value.to_string()));
        } else if line.starts_with("      ") {
            if let Some((_, value)) = self.qualifier.as_mut() {
                append_words(value, line.trim());
            } else if let Some((_, location)) = self.feature.as_mut() {
                location.push_str(line.trim());
            } else {
                return Err("Continuation line outside of a feature.".to_string());
            }
        } else {
            return Err(format!("Unexpected line in feature table `{}`.", line));
        }
        Ok(())
    }

    fn flush_keyword(&mut self) {
        if let Some((name, value)) = self.keyword.take() {
            self.sink.open_keyword(&name, &value);
            self.keyword_open = true;
        }
    }

    fn flush_feature(&mut self) {
        if let Some((name, location)) = self.feature.take() {
            self.sink.open_feature(&name, &location);
            self.feature_open = true;
        }
    }

    fn flush_qualifier(&mut self) {
        if let Some((name, value)) = self.qualifier.take() {
            self.sink.qualifier(&name, &unquote(&value));
        }
    }

    fn close_feature(&mut self) {
        self.flush_feature();
        self.flush_qualifier();
        if self.feature_open {
            self.sink.close_feature();
            self.feature_open = false;
        }
    }

    fn close_keyword(&mut self) {
        self.close_feature();
        self.flush_keyword();
        if self.keyword_open {
            self.sink.close_keyword();
            self.keyword_open = false;
        }
    }

    fn end_record(&mut self) {
        self.close_keyword();
        self.section = Section::Header;
    }
}

fn append_words(value: &mut String, words: &str) {
    if !value.is_empty() {
        value.push(' ');
    }
    value.push_str(words);
}

/// Strip the quotes of a qualifier value; doubled quotes stand for one quote.
fn unquote(value: &str) -> String {
    let value = value.trim();
    if let Some(inner) = value.strip_prefix('"') {
        let inner = inner.strip_suffix('"').unwrap_or(inner);
        inner.replace("\"\"", "\"")
    } else {
        value.to_string()
    }
}
