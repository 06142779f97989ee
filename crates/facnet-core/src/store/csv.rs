//! Comma-separated record encoding for facilities and connections
//!
//! One record per line after a fixed header. Fields are never quoted, so
//! text fields may not contain commas (enforced by the graph store).

use crate::graph::types::{Connection, Facility, NodeId};

pub const FACILITIES_HEADER: &str = "ID,Name,District,Latitude,Longitude,Capacity";
pub const CONNECTIONS_HEADER: &str = "FromID,ToID,DistanceKM,TimeMinutes,Description";

const FACILITY_FIELDS: usize = 6;
const CONNECTION_FIELDS: usize = 5;

/// Text fields are kept verbatim; only numeric fields are trimmed
fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != expected {
        return Err(format!(
            "expected {} fields, found {}",
            expected,
            fields.len()
        ));
    }
    Ok(fields)
}

fn parse_field<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, String> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("invalid {}: {:?}", name, raw))
}

pub fn parse_facility(line: &str) -> Result<Facility, String> {
    let fields = split_fields(line, FACILITY_FIELDS)?;
    Ok(Facility {
        id: NodeId(parse_field("id", fields[0])?),
        name: fields[1].to_string(),
        district: fields[2].to_string(),
        latitude: parse_field("latitude", fields[3])?,
        longitude: parse_field("longitude", fields[4])?,
        capacity: parse_field("capacity", fields[5])?,
    })
}

pub fn parse_connection(line: &str) -> Result<Connection, String> {
    let fields = split_fields(line, CONNECTION_FIELDS)?;
    Ok(Connection {
        from: NodeId(parse_field("source id", fields[0])?),
        to: NodeId(parse_field("destination id", fields[1])?),
        distance: parse_field("distance", fields[2])?,
        time: parse_field("time", fields[3])?,
        label: fields[4].to_string(),
    })
}

pub fn facility_line(facility: &Facility) -> String {
    format!(
        "{},{},{},{},{},{}",
        facility.id,
        facility.name,
        facility.district,
        facility.latitude,
        facility.longitude,
        facility.capacity
    )
}

pub fn connection_line(connection: &Connection) -> String {
    format!(
        "{},{},{},{},{}",
        connection.from, connection.to, connection.distance, connection.time, connection.label
    )
}

/// Render a full file: header line followed by one line per record
pub fn render<T>(header: &str, records: impl Iterator<Item = T>, line: fn(T) -> String) -> String {
    let mut out = String::from(header);
    out.push('\n');
    for record in records {
        out.push_str(&line(record));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_facility() {
        let facility = parse_facility("3,Kibagabaga,Gasabo,-1.93,30.11,120").unwrap();
        assert_eq!(facility.id, NodeId(3));
        assert_eq!(facility.name, "Kibagabaga");
        assert_eq!(facility.district, "Gasabo");
        assert_eq!(facility.latitude, -1.93);
        assert_eq!(facility.longitude, 30.11);
        assert_eq!(facility.capacity, 120);
    }

    #[test]
    fn test_parse_facility_wrong_field_count() {
        let err = parse_facility("3,Kibagabaga,Gasabo,-1.93,30.11").unwrap_err();
        assert!(err.contains("expected 6 fields"));
    }

    #[test]
    fn test_parse_facility_bad_number() {
        let err = parse_facility("x,Name,District,0,0,1").unwrap_err();
        assert!(err.contains("invalid id"));
        assert!(parse_facility("-4,Name,District,0,0,1").is_err());
    }

    #[test]
    fn test_parse_connection() {
        let conn = parse_connection("1,2,4.5,12,Main road").unwrap();
        assert_eq!(conn.from, NodeId(1));
        assert_eq!(conn.to, NodeId(2));
        assert_eq!(conn.distance, 4.5);
        assert_eq!(conn.time, 12);
        assert_eq!(conn.label, "Main road");
    }

    #[test]
    fn test_parse_connection_allows_empty_label() {
        let conn = parse_connection("1,2,4,12,").unwrap();
        assert_eq!(conn.label, "");
    }

    #[test]
    fn test_parse_connection_rejects_extra_fields() {
        assert!(parse_connection("1,2,4,12,Main road,extra").is_err());
    }

    #[test]
    fn test_lines_parse_back() {
        let mut facility = Facility::new(7, "Remera", 35);
        facility.district = "Gasabo".to_string();
        facility.latitude = -1.95;
        assert_eq!(parse_facility(&facility_line(&facility)).unwrap(), facility);

        let conn = Connection::new(7, 8, 2.25).with_time(9).with_label("Airport road");
        assert_eq!(connection_line(&conn), "7,8,2.25,9,Airport road");
        assert_eq!(parse_connection(&connection_line(&conn)).unwrap(), conn);
    }

    #[test]
    fn test_text_fields_keep_surrounding_spaces() {
        let facility = parse_facility(" 4 , Depot ,East , 0,0 , 9").unwrap();
        assert_eq!(facility.id, NodeId(4));
        assert_eq!(facility.name, " Depot ");
        assert_eq!(facility.district, "East ");
        assert_eq!(facility.capacity, 9);

        let conn = parse_connection("1, 2,3 ,4,  ring ").unwrap();
        assert_eq!(conn.to, NodeId(2));
        assert_eq!(conn.label, "  ring ");
    }

    #[test]
    fn test_render_with_header() {
        let conns = [Connection::new(1, 2, 4.0), Connection::new(2, 3, 1.0)];
        let text = render(CONNECTIONS_HEADER, conns.iter(), connection_line);
        assert_eq!(
            text,
            "FromID,ToID,DistanceKM,TimeMinutes,Description\n1,2,4,0,\n2,3,1,0,\n"
        );
    }
}
