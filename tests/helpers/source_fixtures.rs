//! Common Python source fixtures for tests.
//!
//! Each fixture packs many constructs into one file, the way real
//! conformance inputs do.

use codeindex::{Analyzer, FileAnalysis};
use once_cell::sync::Lazy;

pub const CLASSES: &str = r#""""Classes, inheritance and metaclasses."""

import abc
from typing import Generic, TypeVar

T = TypeVar("T")


class Meta(type):
    def __new__(mcs, name, bases, namespace):
        return super().__new__(mcs, name, bases, namespace)


class Animal(abc.ABC):
    """Base animal."""

    sound: str = ""

    def __init__(self, name):
        self.name = name

    @abc.abstractmethod
    def speak(self):
        pass

    def __repr__(self):
        return f"{self.__class__.__name__}({self.name!r})"


class Flyer:
    @staticmethod
    def altitude():
        return 100

    @classmethod
    def create(cls):
        return cls()


class Swimmer:
    pass


class Duck(Animal, Flyer, Swimmer, metaclass=Meta):
    class Feathers:
        color = "white"

    @property
    def speak(self):
        return "quack"


class Box(Generic[T]):
    def get(self) -> T:
        return self.item
"#;

pub const FUNCTIONS: &str = r#"import asyncio
import contextlib


def plain(a, b=2, *args, key, **kwargs):
    return a


def counter(limit):
    n = 0
    while n < limit:
        if n % 2:
            yield n
        n += 1


def outer():
    def inner():
        yield 1
    return inner


async def fetch(session, url):
    async with session.get(url) as response:
        return await response.text()


async def stream(source):
    async for item in source:
        yield item


@contextlib.contextmanager
def managed():
    try:
        yield "resource"
    finally:
        pass
"#;

pub const IMPORTS: &str = r#"import os
import os.path as osp
from collections import (
    OrderedDict,
    defaultdict,
    namedtuple,
)
from . import sibling
from ..pkg.mod import thing as alias
from typing import *
"#;

/// Well-formed definitions around a call that lost its `def` keyword.
pub const MISSING_DEF: &str = r#"class Dictionary:
    def __init__(self):
        self.data = {}

    def get(self, key):
        return self.data.get(key)

    update(self, key, value):
        self.data[key] = value

    def clear(self):
        self.data = {}


def main():
    d = Dictionary()
    print(d.get("x"))
"#;

pub const STRINGS: &str = r#"my_dict = {"key1": "value1"}
label = f"Value for key1: {my_dict["key1"]}"
nested = f'{f"{label!r:>10}"}'
raw = r"C:\path\to\file"
data = b'\x00\x01'
quote = 'It\'s fine'
doc = """Triple with "quotes" and 'apostrophes'"""
"#;

/// All fixtures, by file name.
pub const ALL: &[(&str, &str)] = &[
    ("fixtures/classes.py", CLASSES),
    ("fixtures/functions.py", FUNCTIONS),
    ("fixtures/imports.py", IMPORTS),
    ("fixtures/missing_def.py", MISSING_DEF),
    ("fixtures/strings.py", STRINGS),
];

/// `levels` nested `if` blocks, one space of indentation per level,
/// followed by a top-level `after` function.
pub fn nested_blocks(levels: usize) -> String {
    let mut source = String::new();
    for level in 0..levels {
        source.push_str(&" ".repeat(level));
        source.push_str("if x:\n");
    }
    source.push_str(&" ".repeat(levels));
    source.push_str("pass\n");
    source.push_str("def after():\n    pass\n");
    source
}

/// The class fixture analyzed once and shared between tests.
pub static CLASSES_ANALYSIS: Lazy<FileAnalysis> =
    Lazy::new(|| Analyzer::default().analyze("fixtures/classes.py", CLASSES));

pub static FUNCTIONS_ANALYSIS: Lazy<FileAnalysis> =
    Lazy::new(|| Analyzer::default().analyze("fixtures/functions.py", FUNCTIONS));
