// cwgen -- turning plain text into morse code audio
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Announcing incoming mail.
//!
//! Talking to an actual mail server is left to implementors of [`Mailbox`];
//! this module only deals with picking the interesting header fields out
//! of raw header text and with remembering which messages were announced.

use std::collections::HashSet;
use std::io;

use log::{debug, warn};
use regex::Regex;

/// The header fields worth announcing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailHeader {
    /// Display name of the sender, empty if the address stands alone.
    pub name: String,
    pub email: String,
    pub subject: String,
    pub date: Option<String>,
}

impl MailHeader {
    /// Extract the fields from raw header text.
    ///
    /// Returns `None` if either the sender or the subject is missing.
    ///
    /// ```
    /// use cwgen::mail::MailHeader;
    ///
    /// let header = MailHeader::parse(
    ///     "From: Jane Doe <jane@example.org>\r\nSubject: Field day\r\n",
    /// ).unwrap();
    /// assert_eq!(header.name, "Jane Doe");
    /// assert_eq!(header.announcement(), "Jane Doe Field day");
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        HeaderParser::new().parse(raw)
    }

    /// Text to be keyed for this message: the sender followed by the subject.
    pub fn announcement(&self) -> String {
        let sender = if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        };
        format!("{} {}", sender, self.subject)
    }
}

/// Precompiled patterns for the header fields.
pub struct HeaderParser {
    from: Regex,
    bare_from: Regex,
    subject: Regex,
    date: Regex,
}

impl HeaderParser {
    pub fn new() -> Self {
        let compile = |pattern: &str| Regex::new(pattern).expect("header patterns are valid");
        Self {
            from: compile(r"(?m)^From:[ \t]*(?P<name>.*?)[ \t]*<(?P<email>[^>]*)>\s*$"),
            bare_from: compile(r"(?m)^From:[ \t]*(?P<email>\S+)\s*$"),
            subject: compile(r"(?m)^Subject:[ \t]*(?P<subject>.*?)\s*$"),
            date: compile(r"(?m)^Date:[ \t]*(?P<date>.*?)\s*$"),
        }
    }

    pub fn parse(&self, raw: &str) -> Option<MailHeader> {
        let (name, email) = if let Some(caps) = self.from.captures(raw) {
            (
                caps["name"].trim_matches('"').to_string(),
                caps["email"].to_string(),
            )
        } else {
            let caps = self.bare_from.captures(raw)?;
            (String::new(), caps["email"].to_string())
        };
        let subject = self.subject.captures(raw)?["subject"].to_string();
        let date = self
            .date
            .captures(raw)
            .map(|caps| caps["date"].to_string());
        Some(MailHeader {
            name,
            email,
            subject,
            date,
        })
    }
}

impl Default for HeaderParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text holding several raw headers separated by blank lines.
pub fn split_header_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// A message as delivered by a mailbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    /// Identifier that stays the same across polls.
    pub id: String,
    /// Raw header text of the message.
    pub header: String,
}

/// Source of unread messages, e.g. a connection to a mail server.
pub trait Mailbox {
    /// Messages that are currently marked as unseen.
    fn unseen(&mut self) -> io::Result<Vec<RawMessage>>;
}

/// Polls a mailbox and reports every message only once.
pub struct Poller<M> {
    mailbox: M,
    parser: HeaderParser,
    announced: HashSet<String>,
}

impl<M: Mailbox> Poller<M> {
    pub fn new(mailbox: M) -> Self {
        Self {
            mailbox,
            parser: HeaderParser::new(),
            announced: HashSet::new(),
        }
    }

    /// Headers of the unseen messages that were not reported by an earlier poll.
    ///
    /// Messages with headers that cannot be parsed are skipped and not retried.
    pub fn poll(&mut self) -> io::Result<Vec<MailHeader>> {
        let messages = self.mailbox.unseen()?;
        debug!("{} unseen messages", messages.len());
        let mut headers = Vec::new();
        for message in messages {
            if !self.announced.insert(message.id.clone()) {
                continue;
            }
            match self.parser.parse(&message.header) {
                Some(header) => headers.push(header),
                None => warn!("skipping message {} without sender or subject", message.id),
            }
        }
        Ok(headers)
    }

    pub fn mailbox(&self) -> &M {
        &self.mailbox
    }
}
