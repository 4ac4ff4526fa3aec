use std::fs::read_to_string;

fn main() {
    let buf = read_to_string("./tests/resources/calendar.js").unwrap();
    let reader = calendarjs::CalendarJsParser::from_body(&buf);

    for event in reader {
        println!("{:?}", &event);
        match &event {
            Err(_) => {}
            Ok(event) => println!("{}", serde_json::to_string(event).unwrap()),
        }
    }
}
