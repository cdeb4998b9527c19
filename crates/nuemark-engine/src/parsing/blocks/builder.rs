use crate::parsing::{
    attrs::Attrs,
    inline::{Token, tokenize},
    lines::{common_indent, dedent, dedent_line, indent_of, is_blank},
    reflinks::Reflinks,
};

use super::{
    classify::{LineClass, LineClassifier},
    kinds::{
        BlockQuote, CodeFence, FenceSig, HeadingSyntax, ListItem, ListMarker, Paragraph,
        TableSyntax, TagHeader,
    },
    types::{Block, CodeBlock, List, Table, TagBlock},
};

/// Phase 2 of block parsing: turns classified lines into a block tree.
///
/// Container blocks (quotes, list items, tag bodies) collect their lines,
/// strip their own prefix or indentation and parse the result recursively
/// with the same builder. Reference definitions found at any depth go into
/// the shared [`Reflinks`] table.
pub struct BlockBuilder<'r> {
    classifier: LineClassifier,
    reflinks: &'r mut Reflinks,
}

impl<'r> BlockBuilder<'r> {
    pub fn new(reflinks: &'r mut Reflinks) -> Self {
        Self {
            classifier: LineClassifier,
            reflinks,
        }
    }

    pub fn build(&mut self, lines: &[String]) -> Vec<Block> {
        let mut out = vec![];
        let mut paragraph: Vec<String> = vec![];
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i].as_str();
            let next = lines.get(i + 1).map(String::as_str);

            match self.classifier.classify(line, next, !paragraph.is_empty()) {
                LineClass::Blank => {
                    flush_paragraph(&mut out, &mut paragraph);
                    if out.last().is_some_and(|b| *b != Block::Newline) {
                        out.push(Block::Newline);
                    }
                    i += 1;
                }
                LineClass::Heading {
                    level,
                    text,
                    underlined,
                } => {
                    flush_paragraph(&mut out, &mut paragraph);
                    out.push(Block::Heading(HeadingSyntax::build(level, text)));
                    i += if underlined { 2 } else { 1 };
                }
                LineClass::FenceOpen(sig) => {
                    flush_paragraph(&mut out, &mut paragraph);
                    let (block, end) = self.consume_fence(lines, i, &sig);
                    out.push(block);
                    i = end;
                }
                LineClass::Break => {
                    flush_paragraph(&mut out, &mut paragraph);
                    out.push(Block::Break);
                    i += 1;
                }
                LineClass::ListItem(marker) => {
                    flush_paragraph(&mut out, &mut paragraph);
                    let (block, end) = self.consume_list(lines, i, marker);
                    out.push(block);
                    i = end;
                }
                LineClass::Quote => {
                    flush_paragraph(&mut out, &mut paragraph);
                    let (block, end) = self.consume_quote(lines, i);
                    out.push(block);
                    i = end;
                }
                LineClass::TableHeader => {
                    flush_paragraph(&mut out, &mut paragraph);
                    let (block, end) = consume_table(lines, i);
                    out.push(block);
                    i = end;
                }
                LineClass::RefDef { label, link } => {
                    self.reflinks.insert(label, link);
                    i += 1;
                }
                LineClass::Tag(header) => {
                    flush_paragraph(&mut out, &mut paragraph);
                    let (block, end) = self.consume_tag(lines, i, header);
                    out.push(block);
                    i = end;
                }
                LineClass::Text => {
                    paragraph.push(Paragraph::line(line));
                    i += 1;
                }
            }
        }

        flush_paragraph(&mut out, &mut paragraph);
        while out.last() == Some(&Block::Newline) {
            out.pop();
        }
        out
    }

    fn consume_fence(&self, lines: &[String], start: usize, sig: &FenceSig) -> (Block, usize) {
        let mut code = vec![];
        let mut i = start + 1;
        let mut closed = false;

        while i < lines.len() {
            let line = lines[i].as_str();
            i += 1;
            if CodeFence::closes(sig, line) {
                closed = true;
                break;
            }
            code.push(line);
        }
        if !closed {
            log::debug!("code fence `{}` left open, running to end of input", sig.info);
        }

        let info = CodeFence::info(&sig.info);
        let block = Block::Code(CodeBlock {
            name: info.name,
            code: code.join("\n"),
            attr: info.attr,
            data: info.data,
        });
        (block, i)
    }

    fn consume_list(&mut self, lines: &[String], start: usize, first: ListMarker) -> (Block, usize) {
        let mut items: Vec<Vec<String>> = vec![];
        let mut width = first.width;
        let mut i = start;

        while i < lines.len() {
            let line = lines[i].as_str();

            if let Some(marker) = ListItem::marker(line).filter(|m| m.indent < width) {
                // A marker shallower than the list itself belongs to an outer context.
                if marker.indent < first.indent {
                    break;
                }
                items.push(vec![ListItem::content(line, marker).to_string()]);
                width = marker.width;
                i += 1;
                continue;
            }

            if is_blank(line) {
                let continues = lines[i + 1..]
                    .iter()
                    .find(|l| !is_blank(l))
                    .is_some_and(|l| {
                        indent_of(l) >= width
                            || ListItem::marker(l)
                                .is_some_and(|m| m.indent >= first.indent && m.indent < width)
                    });
                if !continues {
                    break;
                }
                if let Some(item) = items.last_mut() {
                    item.push(String::new());
                }
                i += 1;
                continue;
            }

            let Some(item) = items.last_mut() else { break };
            if indent_of(line) > first.indent {
                item.push(dedent_line(line, width).to_string());
            } else if item.last().is_some_and(|l| !is_blank(l))
                && self.classifier.classify(line, None, true) == LineClass::Text
            {
                // Lazy continuation of the item's paragraph.
                item.push(line.trim().to_string());
            } else {
                break;
            }
            i += 1;
        }

        let items = items.iter().map(|body| self.build(body)).collect();
        let block = Block::List(List {
            items,
            numbered: first.numbered,
        });
        (block, i)
    }

    fn consume_quote(&mut self, lines: &[String], start: usize) -> (Block, usize) {
        let mut body = vec![];
        let mut i = start;
        while let Some(rest) = lines.get(i).and_then(|l| BlockQuote::strip_prefix(l)) {
            body.push(rest.to_string());
            i += 1;
        }
        (Block::Quote(self.build(&body)), i)
    }

    fn consume_tag(&mut self, lines: &[String], start: usize, header: TagHeader) -> (Block, usize) {
        let mut body = vec![];
        let mut i = start + 1;

        while i < lines.len() {
            let line = lines[i].as_str();
            if is_blank(line) {
                let continues = lines[i + 1..]
                    .iter()
                    .find(|l| !is_blank(l))
                    .is_some_and(|l| indent_of(l) > 0);
                if !continues {
                    break;
                }
            } else if indent_of(line) == 0 {
                break;
            }
            body.push(line.to_string());
            i += 1;
        }

        let body = dedent(&body, common_indent(&body));
        let block = Block::Tag(TagBlock {
            name: header.name,
            attr: header.attr,
            data: header.data,
            blocks: self.build(&body),
        });
        (block, i)
    }
}

fn flush_paragraph(out: &mut Vec<Block>, paragraph: &mut Vec<String>) {
    if !paragraph.is_empty() {
        out.push(Block::Content(std::mem::take(paragraph)));
    }
}

fn consume_table(lines: &[String], start: usize) -> (Block, usize) {
    let mut rows = vec![row_tokens(&lines[start])];
    let mut i = start + 2;
    while let Some(line) = lines.get(i).filter(|l| TableSyntax::is_row(l)) {
        rows.push(row_tokens(line));
        i += 1;
    }
    let block = Block::Table(Table {
        rows,
        attr: Attrs::new(),
        head: true,
    });
    (block, i)
}

fn row_tokens(line: &str) -> Vec<Vec<Token>> {
    TableSyntax::split_cells(line)
        .iter()
        .map(|cell| tokenize(cell))
        .collect()
}
