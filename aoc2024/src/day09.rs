//! Day 9: Disk Fragmenter

use anyhow::bail;
use aoc_common::{check_part, Answer};

#[derive(Debug, Clone, Copy)]
struct Span {
    pos: usize,
    len: usize,
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut files = vec![];
    let mut gaps = vec![];
    let mut pos = 0;
    for (i, &b) in input.trim().as_bytes().iter().enumerate() {
        if !b.is_ascii_digit() {
            bail!("unexpected {:?} in disk map", b as char);
        }
        let span = Span { pos, len: (b - b'0') as usize };
        if i % 2 == 0 { files.push(span) } else { gaps.push(span) }
        pos += span.len;
    }

    if part == 1 {
        let mut blocks: Vec<Option<usize>> = vec![None; pos];
        for (id, file) in files.iter().enumerate() {
            blocks[file.pos..file.pos + file.len].fill(Some(id));
        }
        let (mut left, mut right) = (0, blocks.len());
        loop {
            while left < right && blocks[left].is_some() {
                left += 1;
            }
            while left < right && blocks[right - 1].is_none() {
                right -= 1;
            }
            if left + 1 >= right {
                break;
            }
            blocks.swap(left, right - 1);
        }
        return Ok(blocks.iter().enumerate().map(|(i, id)| i * id.unwrap_or(0)).sum::<usize>().to_string());
    }

    for file in files.iter_mut().rev() {
        if let Some(gap) = gaps.iter_mut().take_while(|gap| gap.pos < file.pos).find(|gap| gap.len >= file.len) {
            file.pos = gap.pos;
            gap.pos += file.len;
            gap.len -= file.len;
        }
    }
    Ok(files
        .iter()
        .enumerate()
        .map(|(id, file)| (file.pos..file.pos + file.len).sum::<usize>() * id)
        .sum::<usize>()
        .to_string())
}
