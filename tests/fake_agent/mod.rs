//! Минимальный SNMP агент на UDP: отвечает на GET-NEXT / GET-BULK строками
//! из заданной таблицы. Кодирование BER только в объёме, нужном клиенту.

use std::net::UdpSocket;
use std::thread;

pub const HR_SW_RUN_ENTRY: &[u64] = &[1, 3, 6, 1, 2, 1, 25, 4, 2, 1];

#[derive(Clone)]
pub enum Cell {
    Int(i64),
    Str(&'static str),
}

/// Строка hrSWRunTable: индекс, имя, статус
pub fn process_rows(rows: &[(u64, &'static str, i64)]) -> Vec<(Vec<u64>, Cell)> {
    let mut table = Vec::new();
    for &(row, name, _) in rows {
        table.push((column_oid(2, row), Cell::Str(name)));
    }
    for &(row, _, status) in rows {
        table.push((column_oid(7, row), Cell::Int(status)));
    }
    table.sort_by(|a, b| a.0.cmp(&b.0));
    table
}

fn column_oid(column: u64, row: u64) -> Vec<u64> {
    let mut oid = HR_SW_RUN_ENTRY.to_vec();
    oid.push(column);
    oid.push(row);
    oid
}

/// Запускает агента в фоне, возвращает порт
pub fn spawn(table: Vec<(Vec<u64>, Cell)>) -> u16 {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    let port = socket.local_addr().unwrap().port();

    thread::spawn(move || {
        let mut buf = [0u8; 65535];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf) else {
                return;
            };
            if let Some(response) = respond(&buf[..len], &table) {
                let _ = socket.send_to(&response, peer);
            }
        }
    });

    port
}

fn respond(request: &[u8], table: &[(Vec<u64>, Cell)]) -> Option<Vec<u8>> {
    let (_, message, _) = read_tlv(request)?;
    let (_, version, rest) = read_tlv(message)?;
    let (_, community, rest) = read_tlv(rest)?;
    let (pdu_tag, pdu, _) = read_tlv(rest)?;
    let (_, req_id, rest) = read_tlv(pdu)?;
    let (_, _, rest) = read_tlv(rest)?;
    let (_, _, rest) = read_tlv(rest)?;
    let (_, varbinds, _) = read_tlv(rest)?;
    let (_, varbind, _) = read_tlv(varbinds)?;
    let (_, oid, _) = read_tlv(varbind)?;
    let requested = decode_oid(oid);

    // GET-NEXT (0xA1): одна следующая строка; GET-BULK (0xA5): все оставшиеся
    let mut next: Vec<&(Vec<u64>, Cell)> = table.iter().filter(|(o, _)| *o > requested).collect();
    if pdu_tag == 0xA1 {
        next.truncate(1);
    }

    let mut encoded = Vec::new();
    for (o, cell) in &next {
        encoded.extend(varbind_bytes(o, cell));
    }
    // За концом таблицы отдаём OID вне поддерева, на нём walk останавливается
    if pdu_tag != 0xA1 || next.is_empty() {
        encoded.extend(varbind_bytes(&[1, 3, 6, 1, 2, 1, 25, 5, 0], &Cell::Int(0)));
    }

    let mut body = tlv(0x02, req_id);
    body.extend(tlv(0x02, &[0]));
    body.extend(tlv(0x02, &[0]));
    body.extend(tlv(0x30, &encoded));

    let mut message = tlv(0x02, version);
    message.extend(tlv(0x04, community));
    message.extend(tlv(0xA2, &body));
    Some(tlv(0x30, &message))
}

fn varbind_bytes(oid: &[u64], cell: &Cell) -> Vec<u8> {
    let mut content = tlv(0x06, &encode_oid(oid));
    content.extend(match cell {
        Cell::Int(n) => tlv(0x02, &encode_int(*n)),
        Cell::Str(s) => tlv(0x04, s.as_bytes()),
    });
    tlv(0x30, &content)
}

fn read_tlv(data: &[u8]) -> Option<(u8, &[u8], &[u8])> {
    let tag = *data.first()?;
    let first = *data.get(1)?;
    let (len, header) = if first & 0x80 == 0 {
        (first as usize, 2)
    } else {
        let n = (first & 0x7F) as usize;
        let bytes = data.get(2..2 + n)?;
        (bytes.iter().fold(0usize, |acc, b| (acc << 8) | *b as usize), 2 + n)
    };
    let content = data.get(header..header + len)?;
    Some((tag, content, &data[header + len..]))
}

fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    let len = content.len();
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xFF {
        out.extend([0x81, len as u8]);
    } else {
        out.extend([0x82, (len >> 8) as u8, len as u8]);
    }
    out.extend_from_slice(content);
    out
}

fn encode_int(n: i64) -> Vec<u8> {
    let bytes = n.to_be_bytes();
    let mut start = 0;
    while start < 7 {
        let redundant = (bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
            || (bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0);
        if !redundant {
            break;
        }
        start += 1;
    }
    bytes[start..].to_vec()
}

fn encode_oid(oid: &[u64]) -> Vec<u8> {
    let mut out = vec![(oid[0] * 40 + oid[1]) as u8];
    for &arc in &oid[2..] {
        let mut chunk = vec![(arc & 0x7F) as u8];
        let mut rest = arc >> 7;
        while rest > 0 {
            chunk.push((rest & 0x7F) as u8 | 0x80);
            rest >>= 7;
        }
        chunk.reverse();
        out.extend(chunk);
    }
    out
}

fn decode_oid(bytes: &[u8]) -> Vec<u64> {
    let Some((&first, rest)) = bytes.split_first() else {
        return Vec::new();
    };
    let mut oid = vec![u64::from(first / 40), u64::from(first % 40)];
    let mut arc = 0u64;
    for &b in rest {
        arc = (arc << 7) | u64::from(b & 0x7F);
        if b & 0x80 == 0 {
            oid.push(arc);
            arc = 0;
        }
    }
    oid
}
