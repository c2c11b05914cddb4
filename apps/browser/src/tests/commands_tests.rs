use super::*;

fn action(line: &str) -> ViewAction {
    match parse_command(line) {
        Ok(Some(Command::Action(action))) => action,
        other => panic!("expected an action for '{line}', got {other:?}"),
    }
}

#[test]
fn filter_values_keep_inner_spaces() {
    assert_eq!(
        action("make Land Rover"),
        ViewAction::SetFilter {
            attribute: FilterAttribute::Make,
            value: "Land Rover".into(),
        }
    );
    assert_eq!(
        action("  filter Transmission   Manual "),
        ViewAction::SetFilter {
            attribute: FilterAttribute::Transmission,
            value: "Manual".into(),
        }
    );
}

#[test]
fn navigation_and_toggles() {
    assert_eq!(action("next"), ViewAction::NextPage);
    assert_eq!(action("P"), ViewAction::PreviousPage);
    assert_eq!(action("sort Year"), ViewAction::Sort { key: SortKey::Year });
    assert_eq!(action("expand 5"), ViewAction::ToggleRow { id: RecordId(5) });
    assert_eq!(
        action("location"),
        ViewAction::ToggleColumnGroup {
            name: LOCATION_GROUP.into()
        }
    );
    assert_eq!(action("style"), ViewAction::ToggleStyle);
}

#[test]
fn non_action_commands() {
    assert_eq!(parse_command("   "), Ok(None));
    assert_eq!(parse_command("show"), Ok(Some(Command::Show)));
    assert_eq!(parse_command("help"), Ok(Some(Command::Help)));
    assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
}

#[test]
fn errors_name_the_problem() {
    assert_eq!(
        parse_command("make"),
        Err(CommandError::MissingArgument {
            command: "make",
            expected: "a value or All",
        })
    );
    assert_eq!(
        parse_command("expand five"),
        Err(CommandError::InvalidId("five".into()))
    );
    assert_eq!(
        parse_command("sort details"),
        Err(CommandError::Name(ParseNameError::UnknownSortKey(
            "details".into()
        )))
    );
    assert_eq!(
        parse_command("filter colour red"),
        Err(CommandError::Name(ParseNameError::UnknownAttribute(
            "colour".into()
        )))
    );
    assert_eq!(
        parse_command("jump 3"),
        Err(CommandError::Unknown("jump".into()))
    );
}
