use csv::{Reader, StringRecord, Terminator, Trim};
use dto::recipient::Recipient;
use log::{debug, warn};

/// Load recipients from a CSV-formatted String, such as:
/// `name,email[,country]`
///
/// There is no header detection and no quoting: every non-blank line is a recipient,
/// in file order. Lines end on `\n` only, a lone `\r` stays within its field.
/// Missing fields are left empty, extra fields are ignored.
pub fn parse_recipients(content: &str) -> Vec<Recipient> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let recipients = load_recipients_from_csv(&mut reader);
    debug!("{} recipient(s) parsed", recipients.len());
    recipients
}

fn load_recipients_from_csv<T>(reader: &mut Reader<T>) -> Vec<Recipient>
where
    T: std::io::Read,
{
    reader
        .records()
        .filter_map(|record| match record {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping unreadable line.\n{e:#?}");
                None
            }
        })
        .filter(|record| !is_blank(record))
        .map(|record| to_recipient(&record))
        .collect()
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(str::is_empty)
}

fn to_recipient(record: &StringRecord) -> Recipient {
    let field = |index: usize| record.get(index).unwrap_or_default().to_owned();
    Recipient::new(field(0), field(1), field(2))
}

#[cfg(test)]
mod tests {
    use crate::recipient::parser::parse_recipients;
    use dto::recipient::tests::{alice, bob, recipient};
    use parameterized::{ide, parameterized};

    ide!();

    #[test]
    fn should_parse_recipients_in_order() {
        let content = "Alice,alice@x.com,France\nBob,bob@x.com,Togo";

        assert_eq!(vec![alice(), bob()], parse_recipients(content));
    }

    #[test]
    fn should_parse_same_content_identically() {
        let content = "Alice,alice@x.com,France\nBob,bob@x.com,Togo";

        assert_eq!(parse_recipients(content), parse_recipients(content));
    }

    #[test]
    fn should_skip_blank_lines() {
        let content = "\nAlice,alice@x.com,France\n   \n\r\nBob,bob@x.com,Togo\n";

        assert_eq!(vec![alice(), bob()], parse_recipients(content));
    }

    #[test]
    fn should_not_split_lines_on_carriage_return() {
        let content = "Alice,alice@x.com,France\rBob,bob@x.com,Togo";

        assert_eq!(
            vec![recipient("Alice", "alice@x.com", "France\rBob")],
            parse_recipients(content)
        );
    }

    #[test]
    fn should_parse_windows_line_endings() {
        let content = "Alice,alice@x.com,France\r\nBob,bob@x.com,Togo\r\n";

        assert_eq!(vec![alice(), bob()], parse_recipients(content));
    }

    #[test]
    fn should_trim_fields() {
        let content = "  Alice , alice@x.com ,  France  \r\n";

        assert_eq!(vec![alice()], parse_recipients(content));
    }

    #[parameterized(
        line = {"Alice,alice@x.com", "Alice", ",,", "Alice,alice@x.com,France,extra"},
        expected_recipient = {
            recipient("Alice", "alice@x.com", ""),
            recipient("Alice", "", ""),
            recipient("", "", ""),
            recipient("Alice", "alice@x.com", "France"),
        }
    )]
    fn should_tolerate_irregular_lines(line: &str, expected_recipient: dto::recipient::Recipient) {
        assert_eq!(vec![expected_recipient], parse_recipients(line));
    }

    #[test]
    fn should_keep_header_line_as_data() {
        let content = "name,email,country\nAlice,alice@x.com,France";

        let recipients = parse_recipients(content);
        assert_eq!(2, recipients.len());
        assert_eq!(&recipient("name", "email", "country"), &recipients[0]);
    }

    #[test]
    fn should_keep_quotes_as_is() {
        let content = "\"Doe, Jane\",jane@x.com";

        assert_eq!(
            vec![recipient("\"Doe", "Jane\"", "jane@x.com")],
            parse_recipients(content)
        );
    }

    #[test]
    fn should_parse_nothing_from_empty_content() {
        assert!(parse_recipients("").is_empty());
    }
}
